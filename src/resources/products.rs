// Product approval resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{Page, Repository, ResourceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    Draft,
    PendingApproval,
    Approved,
    Rejected,
    Withdrawn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: u64,
    pub version: u64,
    pub name: String,
    pub merchant: String,
    pub status: ProductStatus,
    pub price_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: u64,
    pub version: u64,
    pub name: String,
    pub description: String,
    pub merchant: String,
    pub status: ProductStatus,
    pub price_cents: u64,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub status: Vec<ProductStatus>,
    pub name: Option<String>,
    pub merchant: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub status: ProductStatus,
    pub price_cents: u64,
}

pub trait ProductCatalog:
    Repository<
    Id = u64,
    Entity = ProductSummary,
    Criteria = ProductFilter,
    Payload = ProductPayload,
    Data = Page<ProductSummary>,
>
{
}

impl<T> ProductCatalog for T where
    T: Repository<
        Id = u64,
        Entity = ProductSummary,
        Criteria = ProductFilter,
        Payload = ProductPayload,
        Data = Page<ProductSummary>,
    >
{
}

pub trait ProductEditor:
    Repository<
    Id = u64,
    Entity = ProductDetail,
    Criteria = ProductFilter,
    Payload = ProductPayload,
    Data = ProductDetail,
>
{
}

impl<T> ProductEditor for T where
    T: Repository<
        Id = u64,
        Entity = ProductDetail,
        Criteria = ProductFilter,
        Payload = ProductPayload,
        Data = ProductDetail,
    >
{
}

pub type ProductListStore = ResourceStore<dyn ProductCatalog>;
pub type ProductDetailStore = ResourceStore<dyn ProductEditor>;
