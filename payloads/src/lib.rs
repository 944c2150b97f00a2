pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ListPath, RequestContext};
pub use requests::{
    DateRange, FilterValue, Filters, ListRequest, PageWindow, Sort,
    SortDirection,
};
pub use reqwest::StatusCode;
pub use responses::Page;

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_type {
    ($($name:ident),* $(,)?) => {
        $(
            /// Id type wrapper helps ensure we don't mix up ids for different
            /// entities.
            #[derive(
                Debug,
                Clone,
                Copy,
                PartialEq,
                Eq,
                Hash,
                PartialOrd,
                Ord,
                Serialize,
                Deserialize,
                derive_more::Display,
            )]
            #[serde(transparent)]
            pub struct $name(pub Uuid);
        )*
    };
}

id_type!(
    SchoolId,
    StudentId,
    TeacherId,
    UserId,
    ClassId,
    PaymentId,
    PaymentRequestId,
    SaleId,
    MenuItemId,
    RechargeId,
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub school_id: SchoolId,
    pub full_name: String,
    pub identity_document: Option<String>,
    pub class_name: Option<String>,
    pub grade: Option<String>,
    pub balance: Decimal,
    pub enabled: bool,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub school_id: SchoolId,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub enabled: bool,
}

/// Administrative account with access to the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub school_name: Option<String>,
    pub enabled: bool,
    pub last_login_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: ClassId,
    pub name: String,
    pub grade: String,
    pub section: Option<String>,
    pub teacher_name: Option<String>,
    pub student_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub student_name: String,
    pub concept: String,
    pub amount: Decimal,
    pub late_fee: Decimal,
    pub status: String,
    pub paid_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub id: PaymentRequestId,
    pub concept: String,
    pub amount: Decimal,
    pub due_date: Date,
    pub recipients: u32,
    pub paid_count: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeSale {
    pub id: SaleId,
    pub buyer_name: String,
    pub items: String,
    pub total: Decimal,
    pub payment_method: String,
    pub sold_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub category: Option<String>,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRecharge {
    pub id: RechargeId,
    pub student_name: String,
    pub amount: Decimal,
    pub method: String,
    pub reference: Option<String>,
    pub created_at: Timestamp,
}
