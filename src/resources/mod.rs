// Thin per-resource configuration over the generic engine: the domain types
// each screen works with, the repository contract it needs, and the wiring
// that pairs mutating detail stores with the lists showing the same data.

pub mod achievements;
pub mod activities;
pub mod products;
pub mod registration;
pub mod students;
pub mod users;

use std::sync::Arc;

use crate::auth::{AuthStore, Authenticator};
use crate::config::EngineConfig;
use crate::store::ResourceStore;

pub use achievements::{
    AchievementApprovalStore, AchievementApprovals, AchievementDetail, AchievementDetailStore,
    AchievementEditor, AchievementFilter, AchievementPayload, AchievementSummary, ApprovalStatus,
};
pub use activities::{
    ActivityCatalog, ActivityDetail, ActivityDetailStore, ActivityEditor, ActivityFilter,
    ActivityListStore, ActivityPayload, ActivityStatus, ActivitySummary,
};
pub use products::{
    ProductCatalog, ProductDetail, ProductDetailStore, ProductEditor, ProductFilter,
    ProductListStore, ProductPayload, ProductStatus, ProductSummary,
};
pub use registration::{RegistrationDesk, RegistrationPayload, RegistrationStore};
pub use students::{StudentDetail, StudentRecords, StudentStore};
pub use users::{
    UserAccounts, UserDetail, UserDetailStore, UserDirectory, UserFilter, UserListStore,
    UserPayload, UserStatus, UserSummary,
};

/// Every repository collaborator the application injects. Implementations
/// live in the transport layer outside this crate; tests supply mocks.
pub struct AppRepositories {
    pub authenticator: Arc<dyn Authenticator>,
    pub user_directory: Arc<dyn UserDirectory>,
    pub user_accounts: Arc<dyn UserAccounts>,
    pub registration_desk: Arc<dyn RegistrationDesk>,
    pub activity_catalog: Arc<dyn ActivityCatalog>,
    pub activity_editor: Arc<dyn ActivityEditor>,
    pub achievement_approvals: Arc<dyn AchievementApprovals>,
    pub achievement_editor: Arc<dyn AchievementEditor>,
    pub product_catalog: Arc<dyn ProductCatalog>,
    pub product_editor: Arc<dyn ProductEditor>,
    pub student_records: Arc<dyn StudentRecords>,
}

/// Every store of the application, constructed once per application instance
/// and handed to screens through context. No module-level singletons; tests
/// build as many independent instances as they need.
pub struct AppStores {
    pub auth: Arc<AuthStore>,
    pub user_list: Arc<UserListStore>,
    pub user_detail: Arc<UserDetailStore>,
    pub registration: Arc<RegistrationStore>,
    pub activity_list: Arc<ActivityListStore>,
    pub activity_detail: Arc<ActivityDetailStore>,
    pub achievement_approvals: Arc<AchievementApprovalStore>,
    pub achievement_detail: Arc<AchievementDetailStore>,
    pub product_list: Arc<ProductListStore>,
    pub product_detail: Arc<ProductDetailStore>,
    pub student: Arc<StudentStore>,
}

impl AppStores {
    pub fn new(repositories: AppRepositories, config: &EngineConfig) -> Self {
        let auth = Arc::new(AuthStore::new(
            repositories.authenticator,
            config.latency_for("authentication"),
        ));
        let user_list = Arc::new(ResourceStore::new(
            "user-list",
            repositories.user_directory,
            config.latency_for("user-list"),
        ));
        let user_detail = Arc::new(ResourceStore::new(
            "user-detail",
            repositories.user_accounts,
            config.latency_for("user-detail"),
        ));
        let registration = Arc::new(ResourceStore::new(
            "user-registration",
            repositories.registration_desk,
            config.latency_for("user-registration"),
        ));
        let activity_list = Arc::new(ResourceStore::new(
            "activity-list",
            repositories.activity_catalog,
            config.latency_for("activity-list"),
        ));
        let activity_detail = Arc::new(ResourceStore::new(
            "activity-detail",
            repositories.activity_editor,
            config.latency_for("activity-detail"),
        ));
        let achievement_approvals = Arc::new(ResourceStore::new(
            "achievement-approval-list",
            repositories.achievement_approvals,
            config.latency_for("achievement-approval-list"),
        ));
        let achievement_detail = Arc::new(ResourceStore::new(
            "achievement-detail",
            repositories.achievement_editor,
            config.latency_for("achievement-detail"),
        ));
        let product_list = Arc::new(ResourceStore::new(
            "product-list",
            repositories.product_catalog,
            config.latency_for("product-list"),
        ));
        let product_detail = Arc::new(ResourceStore::new(
            "product-detail",
            repositories.product_editor,
            config.latency_for("product-detail"),
        ));
        let student = Arc::new(ResourceStore::new(
            "student",
            repositories.student_records,
            config.latency_for("student"),
        ));

        // Hand-wired invalidation pairings: a successful mutation on a
        // detail resource stales the list showing the same entities.
        user_detail.invalidate_on_mutation(user_list.clone());
        registration.invalidate_on_mutation(user_list.clone());
        activity_detail.invalidate_on_mutation(activity_list.clone());
        achievement_detail.invalidate_on_mutation(achievement_approvals.clone());
        product_detail.invalidate_on_mutation(product_list.clone());

        Self {
            auth,
            user_list,
            user_detail,
            registration,
            activity_list,
            activity_detail,
            achievement_approvals,
            achievement_detail,
            product_list,
            product_detail,
            student,
        }
    }

    /// Drops every accumulated state, typically on sign-out.
    pub async fn reset_all(&self) {
        use crate::auth::AuthAction;
        use crate::store::Action;

        self.auth.dispatch(AuthAction::Reset).await;
        self.user_list.dispatch(Action::Reset).await;
        self.user_detail.dispatch(Action::Reset).await;
        self.registration.dispatch(Action::Reset).await;
        self.activity_list.dispatch(Action::Reset).await;
        self.activity_detail.dispatch(Action::Reset).await;
        self.achievement_approvals.dispatch(Action::Reset).await;
        self.achievement_detail.dispatch(Action::Reset).await;
        self.product_list.dispatch(Action::Reset).await;
        self.product_detail.dispatch(Action::Reset).await;
        self.student.dispatch(Action::Reset).await;
    }
}
