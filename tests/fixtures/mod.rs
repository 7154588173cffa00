//! Shared test fixtures: sample entities and scripted mock collaborators.
//!
//! Mocks follow the same pattern throughout: responses are queued up front,
//! every call is recorded, and nothing touches a network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use backoffice_core::auth::{Authenticator, Credentials, Login};
use backoffice_core::error::DomainError;
use backoffice_core::resources::{
    AchievementDetail, AchievementFilter, AchievementPayload, AchievementSummary, ActivityDetail,
    ActivityFilter, ActivityPayload, ActivityStatus, ActivitySummary, AppRepositories,
    ApprovalStatus, ProductDetail, ProductFilter, ProductPayload, ProductStatus, ProductSummary,
    RegistrationPayload, StudentDetail, UserDetail, UserFilter, UserPayload, UserStatus,
    UserSummary,
};
use backoffice_core::store::{Page, Repository, SortOrder};

// ---------------------------------------------------------------------------
// Sample data builders

pub fn user(id: u64, name: &str) -> UserSummary {
    UserSummary {
        id,
        version: 1,
        display_name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase()),
        status: UserStatus::Active,
    }
}

pub fn user_page(users: Vec<UserSummary>) -> Page<UserSummary> {
    let total = users.len() as u64;
    Page {
        items: users,
        page: 0,
        page_size: 20,
        total,
    }
}

pub fn user_detail(id: u64, name: &str) -> UserDetail {
    UserDetail {
        id,
        version: 1,
        display_name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase()),
        status: UserStatus::Active,
        roles: vec!["admin".to_string()],
        created_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
    }
}

pub fn achievement(id: u64, title: &str) -> AchievementSummary {
    AchievementSummary {
        id,
        version: 1,
        title: title.to_string(),
        owner: "mentor01".to_string(),
        approval: ApprovalStatus::Pending,
    }
}

pub fn achievement_page(items: Vec<AchievementSummary>) -> Page<AchievementSummary> {
    let total = items.len() as u64;
    Page {
        items,
        page: 0,
        page_size: 20,
        total,
    }
}

pub fn achievement_detail(id: u64, title: &str) -> AchievementDetail {
    AchievementDetail {
        id,
        version: 1,
        title: title.to_string(),
        description: "Awarded for completing the onboarding track".to_string(),
        owner: "mentor01".to_string(),
        approval: ApprovalStatus::Approved,
        submitted_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

pub fn achievement_payload(title: &str) -> AchievementPayload {
    AchievementPayload {
        title: title.to_string(),
        description: "Awarded for completing the onboarding track".to_string(),
        approval: ApprovalStatus::Approved,
    }
}

pub fn activity(id: u64, title: &str) -> ActivitySummary {
    ActivitySummary {
        id,
        version: 1,
        title: title.to_string(),
        status: ActivityStatus::Published,
        starts_at: Utc.with_ymd_and_hms(2025, 9, 1, 18, 0, 0).unwrap(),
    }
}

pub fn activity_detail_fixture(id: u64, title: &str) -> ActivityDetail {
    ActivityDetail {
        id,
        version: 1,
        title: title.to_string(),
        description: "Weekly community session".to_string(),
        status: ActivityStatus::Published,
        starts_at: Utc.with_ymd_and_hms(2025, 9, 1, 18, 0, 0).unwrap(),
        ends_at: Utc.with_ymd_and_hms(2025, 9, 1, 20, 0, 0).unwrap(),
        capacity: 40,
    }
}

pub fn product(id: u64, name: &str) -> ProductSummary {
    ProductSummary {
        id,
        version: 1,
        name: name.to_string(),
        merchant: "acme".to_string(),
        status: ProductStatus::PendingApproval,
        price_cents: 1999,
    }
}

pub fn product_detail_fixture(id: u64, name: &str) -> ProductDetail {
    ProductDetail {
        id,
        version: 1,
        name: name.to_string(),
        description: "Limited edition".to_string(),
        merchant: "acme".to_string(),
        status: ProductStatus::Approved,
        price_cents: 1999,
        submitted_at: Utc.with_ymd_and_hms(2025, 7, 20, 8, 0, 0).unwrap(),
    }
}

pub fn student(id: u64, name: &str) -> StudentDetail {
    StudentDetail {
        id,
        version: 1,
        display_name: name.to_string(),
        email: format!("{}@example.test", name.to_lowercase()),
        enrolled_at: Utc.with_ymd_and_hms(2024, 10, 2, 0, 0, 0).unwrap(),
        achievement_count: 3,
    }
}

pub fn login(name: &str) -> Login {
    Login {
        user_id: 7,
        email: format!("{}@example.test", name.to_lowercase()),
        display_name: name.to_string(),
        roles: vec!["admin".to_string()],
    }
}

pub fn credentials(email: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: "hunter2".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Scripted repository mock

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall<I, C, P> {
    Get {
        id: I,
    },
    Find {
        criteria: C,
        ordering: Option<SortOrder>,
    },
    Create {
        payload: P,
    },
    Update {
        id: I,
        version: u64,
        payload: P,
    },
}

/// Generic scripted repository: pops the next queued response per call kind
/// and records every call. An optional delay simulates collaborator latency
/// under paused time.
pub struct ScriptedRepository<I, E, C, P, D> {
    pub calls: Mutex<Vec<RecordedCall<I, C, P>>>,
    gets: Mutex<VecDeque<Result<D, DomainError>>>,
    finds: Mutex<VecDeque<Result<D, DomainError>>>,
    creates: Mutex<VecDeque<Result<D, DomainError>>>,
    updates: Mutex<VecDeque<Result<D, DomainError>>>,
    delay: Mutex<Option<Duration>>,
    per_call_delays: Mutex<VecDeque<Duration>>,
    _entity: std::marker::PhantomData<fn() -> E>,
}

impl<I, E, C, P, D> Default for ScriptedRepository<I, E, C, P, D> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            gets: Mutex::new(VecDeque::new()),
            finds: Mutex::new(VecDeque::new()),
            creates: Mutex::new(VecDeque::new()),
            updates: Mutex::new(VecDeque::new()),
            delay: Mutex::new(None),
            per_call_delays: Mutex::new(VecDeque::new()),
            _entity: std::marker::PhantomData,
        }
    }
}

impl<I, E, C, P, D> ScriptedRepository<I, E, C, P, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_get(&self, response: Result<D, DomainError>) {
        self.gets.lock().unwrap().push_back(response);
    }

    pub fn queue_find(&self, response: Result<D, DomainError>) {
        self.finds.lock().unwrap().push_back(response);
    }

    pub fn queue_create(&self, response: Result<D, DomainError>) {
        self.creates.lock().unwrap().push_back(response);
    }

    pub fn queue_update(&self, response: Result<D, DomainError>) {
        self.updates.lock().unwrap().push_back(response);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Per-call delay, consumed in call order; takes precedence over the
    /// fixed delay. Used to race two in-flight operations deterministically.
    pub fn queue_delay(&self, delay: Duration) {
        self.per_call_delays.lock().unwrap().push_back(delay);
    }

    pub fn recorded(&self) -> Vec<RecordedCall<I, C, P>>
    where
        I: Clone,
        C: Clone,
        P: Clone,
    {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn simulate_latency(&self) {
        let queued = self.per_call_delays.lock().unwrap().pop_front();
        let delay = queued.or(*self.delay.lock().unwrap());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn pop(
        queue: &Mutex<VecDeque<Result<D, DomainError>>>,
        operation: &str,
    ) -> Result<D, DomainError> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {operation}"))
    }
}

#[async_trait]
impl<I, E, C, P, D> Repository for ScriptedRepository<I, E, C, P, D>
where
    I: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static,
    E: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static,
    C: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static,
    P: Clone + std::fmt::Debug + Send + Sync + 'static,
    D: Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static,
{
    type Id = I;
    type Entity = E;
    type Criteria = C;
    type Payload = P;
    type Data = D;

    // Responses are bound in call order, then the simulated latency runs,
    // so two racing calls each complete with their own scripted response.
    async fn get(&self, id: &I) -> Result<D, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Get { id: id.clone() });
        let response = Self::pop(&self.gets, "get");
        self.simulate_latency().await;
        response
    }

    async fn find(&self, criteria: &C, ordering: Option<&SortOrder>) -> Result<D, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall::Find {
            criteria: criteria.clone(),
            ordering: ordering.cloned(),
        });
        let response = Self::pop(&self.finds, "find");
        self.simulate_latency().await;
        response
    }

    async fn create(&self, payload: &P) -> Result<D, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall::Create {
            payload: payload.clone(),
        });
        let response = Self::pop(&self.creates, "create");
        self.simulate_latency().await;
        response
    }

    async fn update(&self, id: &I, version: u64, payload: &P) -> Result<D, DomainError> {
        self.calls.lock().unwrap().push(RecordedCall::Update {
            id: id.clone(),
            version,
            payload: payload.clone(),
        });
        let response = Self::pop(&self.updates, "update");
        self.simulate_latency().await;
        response
    }
}

pub type MockUserDirectory =
    ScriptedRepository<u64, UserSummary, UserFilter, UserPayload, Page<UserSummary>>;
pub type MockUserAccounts =
    ScriptedRepository<u64, UserDetail, UserFilter, UserPayload, UserDetail>;
pub type MockRegistrationDesk =
    ScriptedRepository<u64, UserDetail, UserFilter, RegistrationPayload, UserDetail>;
pub type MockActivityCatalog =
    ScriptedRepository<u64, ActivitySummary, ActivityFilter, ActivityPayload, Page<ActivitySummary>>;
pub type MockActivityEditor =
    ScriptedRepository<u64, ActivityDetail, ActivityFilter, ActivityPayload, ActivityDetail>;
pub type MockAchievementApprovals = ScriptedRepository<
    u64,
    AchievementSummary,
    AchievementFilter,
    AchievementPayload,
    Page<AchievementSummary>,
>;
pub type MockAchievementEditor = ScriptedRepository<
    u64,
    AchievementDetail,
    AchievementFilter,
    AchievementPayload,
    AchievementDetail,
>;
pub type MockProductCatalog =
    ScriptedRepository<u64, ProductSummary, ProductFilter, ProductPayload, Page<ProductSummary>>;
pub type MockProductEditor =
    ScriptedRepository<u64, ProductDetail, ProductFilter, ProductPayload, ProductDetail>;
pub type MockStudentRecords = ScriptedRepository<u64, StudentDetail, (), (), StudentDetail>;

// ---------------------------------------------------------------------------
// Scripted authenticator

pub struct ScriptedAuthenticator {
    sign_ins: Mutex<VecDeque<Result<Login, DomainError>>>,
    google_sign_ins: Mutex<VecDeque<Result<Login, DomainError>>>,
    sign_outs: Mutex<VecDeque<Result<(), DomainError>>>,
    pub sign_in_calls: AtomicUsize,
    pub google_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    delay: Mutex<Option<Duration>>,
}

impl Default for ScriptedAuthenticator {
    fn default() -> Self {
        Self {
            sign_ins: Mutex::new(VecDeque::new()),
            google_sign_ins: Mutex::new(VecDeque::new()),
            sign_outs: Mutex::new(VecDeque::new()),
            sign_in_calls: AtomicUsize::new(0),
            google_calls: AtomicUsize::new(0),
            sign_out_calls: AtomicUsize::new(0),
            delay: Mutex::new(None),
        }
    }
}

impl ScriptedAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_sign_in(&self, response: Result<Login, DomainError>) {
        self.sign_ins.lock().unwrap().push_back(response);
    }

    pub fn queue_google_sign_in(&self, response: Result<Login, DomainError>) {
        self.google_sign_ins.lock().unwrap().push_back(response);
    }

    pub fn queue_sign_out(&self, response: Result<(), DomainError>) {
        self.sign_outs.lock().unwrap().push_back(response);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    async fn simulate_latency(&self) {
        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl Authenticator for ScriptedAuthenticator {
    async fn sign_in(&self, _credentials: &Credentials) -> Result<Login, DomainError> {
        self.sign_in_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.sign_ins
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for sign_in")
    }

    async fn sign_in_with_google(&self, _id_token: &str) -> Result<Login, DomainError> {
        self.google_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.google_sign_ins
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for sign_in_with_google")
    }

    async fn sign_out(&self, _login: &Login) -> Result<(), DomainError> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;
        self.sign_outs
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left for sign_out")
    }
}

// ---------------------------------------------------------------------------
// Full application wiring with mocks everywhere

pub struct MockApp {
    pub authenticator: Arc<ScriptedAuthenticator>,
    pub user_directory: Arc<MockUserDirectory>,
    pub user_accounts: Arc<MockUserAccounts>,
    pub registration_desk: Arc<MockRegistrationDesk>,
    pub activity_catalog: Arc<MockActivityCatalog>,
    pub activity_editor: Arc<MockActivityEditor>,
    pub achievement_approvals: Arc<MockAchievementApprovals>,
    pub achievement_editor: Arc<MockAchievementEditor>,
    pub product_catalog: Arc<MockProductCatalog>,
    pub product_editor: Arc<MockProductEditor>,
    pub student_records: Arc<MockStudentRecords>,
}

impl MockApp {
    pub fn new() -> Self {
        Self {
            authenticator: Arc::new(ScriptedAuthenticator::new()),
            user_directory: Arc::new(MockUserDirectory::new()),
            user_accounts: Arc::new(MockUserAccounts::new()),
            registration_desk: Arc::new(MockRegistrationDesk::new()),
            activity_catalog: Arc::new(MockActivityCatalog::new()),
            activity_editor: Arc::new(MockActivityEditor::new()),
            achievement_approvals: Arc::new(MockAchievementApprovals::new()),
            achievement_editor: Arc::new(MockAchievementEditor::new()),
            product_catalog: Arc::new(MockProductCatalog::new()),
            product_editor: Arc::new(MockProductEditor::new()),
            student_records: Arc::new(MockStudentRecords::new()),
        }
    }

    pub fn repositories(&self) -> AppRepositories {
        AppRepositories {
            authenticator: self.authenticator.clone(),
            user_directory: self.user_directory.clone(),
            user_accounts: self.user_accounts.clone(),
            registration_desk: self.registration_desk.clone(),
            activity_catalog: self.activity_catalog.clone(),
            activity_editor: self.activity_editor.clone(),
            achievement_approvals: self.achievement_approvals.clone(),
            achievement_editor: self.achievement_editor.clone(),
            product_catalog: self.product_catalog.clone(),
            product_editor: self.product_editor.clone(),
            student_records: self.student_records.clone(),
        }
    }
}
