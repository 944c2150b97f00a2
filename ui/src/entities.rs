//! Per-entity list configuration: which fields are shown, which can be
//! filtered and what goes into the CSV export.

use list_view::FieldSpec;
use payloads::{
    BalanceRecharge, CoffeeSale, FilterValue, Filters, ListPath, MenuItem,
    Payment, PaymentRequest, SchoolClass, Student, Teacher, User,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::json;

use crate::i18n::{Lang, translate};
use crate::utils::format_money;
use crate::utils::time::{format_date, format_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Text,
    /// Yes / no / any.
    Flag,
    /// Sent as `<name>_from` and `<name>_to`.
    DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    const fn new(
        name: &'static str,
        label_key: &'static str,
        kind: FilterKind,
    ) -> Self {
        Self {
            name,
            label_key,
            kind,
        }
    }
}

pub trait EntityList: 'static {
    type Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static;

    const PATH: ListPath;
    const TITLE_KEY: &'static str;
    /// Prefix of the record's label keys; export headers are looked up as
    /// `<prefix>.<key>`.
    const LABEL_PREFIX: &'static str;
    const EXPORT_FILE: &'static str;

    fn fields(lang: Lang) -> Vec<FieldSpec<Self::Record>>;

    fn filters() -> Vec<FilterSpec> {
        Vec::new()
    }

    /// Serialized record keys in export order.
    fn export_keys() -> &'static [&'static str];

    /// Every filter starts out unset.
    fn default_filters() -> Filters {
        Self::filters()
            .iter()
            .map(|filter| (filter.name.to_string(), FilterValue::Empty))
            .collect()
    }

    fn export_label(lang: Lang, key: &str) -> String {
        translate(lang, &format!("{}.{key}", Self::LABEL_PREFIX))
    }
}

fn yes_no(lang: Lang, value: bool) -> String {
    translate(lang, if value { "list.yes" } else { "list.no" })
}

pub struct Students;

impl EntityList for Students {
    type Record = Student;

    const PATH: ListPath = ListPath::STUDENTS;
    const TITLE_KEY: &'static str = "nav.students";
    const LABEL_PREFIX: &'static str = "student";
    const EXPORT_FILE: &'static str = "students.csv";

    fn fields(lang: Lang) -> Vec<FieldSpec<Student>> {
        vec![
            FieldSpec::new("full_name", "student.full_name", |s: &Student| {
                json!(s.full_name)
            })
            .sortable(),
            FieldSpec::new(
                "identity_document",
                "student.identity_document",
                |s: &Student| json!(s.identity_document),
            ),
            FieldSpec::new("class_name", "student.class_name", |s: &Student| {
                json!(s.class_name)
            })
            .sort_by("class.name"),
            FieldSpec::new("grade", "student.grade", |s: &Student| {
                json!(s.grade)
            })
            .sortable(),
            FieldSpec::new("balance", "student.balance", |s: &Student| {
                json!(s.balance)
            })
            .sortable()
            .format_with(|s| format_money(s.balance)),
            FieldSpec::new("enabled", "student.enabled", |s: &Student| {
                json!(s.enabled)
            })
            .format_with(move |s| yes_no(lang, s.enabled)),
            FieldSpec::new("created_at", "student.created_at", |s: &Student| {
                json!(s.created_at)
            })
            .sortable()
            .format_with(|s| format_timestamp(s.created_at)),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("full_name", "filters.search", FilterKind::Text),
            FilterSpec::new("grade", "student.grade", FilterKind::Text),
            FilterSpec::new("enabled", "student.enabled", FilterKind::Flag),
            FilterSpec::new(
                "created_at",
                "student.created_at",
                FilterKind::DateRange,
            ),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &[
            "full_name",
            "identity_document",
            "class_name",
            "grade",
            "balance",
            "enabled",
            "created_at",
        ]
    }
}

pub struct Teachers;

impl EntityList for Teachers {
    type Record = Teacher;

    const PATH: ListPath = ListPath::TEACHERS;
    const TITLE_KEY: &'static str = "nav.teachers";
    const LABEL_PREFIX: &'static str = "teacher";
    const EXPORT_FILE: &'static str = "teachers.csv";

    fn fields(lang: Lang) -> Vec<FieldSpec<Teacher>> {
        vec![
            FieldSpec::new("full_name", "teacher.full_name", |t: &Teacher| {
                json!(t.full_name)
            })
            .sortable(),
            FieldSpec::new("email", "teacher.email", |t: &Teacher| {
                json!(t.email)
            })
            .sortable(),
            FieldSpec::new("phone", "teacher.phone", |t: &Teacher| {
                json!(t.phone)
            }),
            FieldSpec::new("enabled", "teacher.enabled", |t: &Teacher| {
                json!(t.enabled)
            })
            .format_with(move |t| yes_no(lang, t.enabled)),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("full_name", "filters.search", FilterKind::Text),
            FilterSpec::new("enabled", "teacher.enabled", FilterKind::Flag),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &["full_name", "email", "phone", "enabled"]
    }
}

pub struct Users;

impl EntityList for Users {
    type Record = User;

    const PATH: ListPath = ListPath::USERS;
    const TITLE_KEY: &'static str = "nav.users";
    const LABEL_PREFIX: &'static str = "user";
    const EXPORT_FILE: &'static str = "users.csv";

    fn fields(lang: Lang) -> Vec<FieldSpec<User>> {
        vec![
            FieldSpec::new("username", "user.username", |u: &User| {
                json!(u.username)
            })
            .sortable(),
            FieldSpec::new("email", "user.email", |u: &User| json!(u.email))
                .sortable(),
            FieldSpec::new("role", "user.role", |u: &User| json!(u.role))
                .sortable(),
            FieldSpec::new("school_name", "user.school_name", |u: &User| {
                json!(u.school_name)
            })
            .sort_by("school.name"),
            FieldSpec::new("enabled", "user.enabled", |u: &User| {
                json!(u.enabled)
            })
            .format_with(move |u| yes_no(lang, u.enabled)),
            FieldSpec::new("last_login_at", "user.last_login_at", |u: &User| {
                json!(u.last_login_at)
            })
            .sortable()
            .format_with(|u| {
                u.last_login_at.map(format_timestamp).unwrap_or_default()
            }),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("username", "filters.search", FilterKind::Text),
            FilterSpec::new("role", "user.role", FilterKind::Text),
            FilterSpec::new("enabled", "user.enabled", FilterKind::Flag),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &[
            "username",
            "email",
            "role",
            "school_name",
            "enabled",
            "last_login_at",
        ]
    }
}

pub struct Classes;

impl EntityList for Classes {
    type Record = SchoolClass;

    const PATH: ListPath = ListPath::CLASSES;
    const TITLE_KEY: &'static str = "nav.classes";
    const LABEL_PREFIX: &'static str = "class";
    const EXPORT_FILE: &'static str = "classes.csv";

    fn fields(_lang: Lang) -> Vec<FieldSpec<SchoolClass>> {
        vec![
            FieldSpec::new("name", "class.name", |c: &SchoolClass| {
                json!(c.name)
            })
            .sortable(),
            FieldSpec::new("grade", "class.grade", |c: &SchoolClass| {
                json!(c.grade)
            })
            .sortable(),
            FieldSpec::new("section", "class.section", |c: &SchoolClass| {
                json!(c.section)
            }),
            FieldSpec::new(
                "teacher_name",
                "class.teacher_name",
                |c: &SchoolClass| json!(c.teacher_name),
            )
            .sort_by("teacher.full_name"),
            FieldSpec::new(
                "student_count",
                "class.student_count",
                |c: &SchoolClass| json!(c.student_count),
            ),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("name", "filters.search", FilterKind::Text),
            FilterSpec::new("grade", "class.grade", FilterKind::Text),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &["name", "grade", "section", "teacher_name", "student_count"]
    }
}

pub struct Payments;

impl EntityList for Payments {
    type Record = Payment;

    const PATH: ListPath = ListPath::PAYMENTS;
    const TITLE_KEY: &'static str = "nav.payments";
    const LABEL_PREFIX: &'static str = "payment";
    const EXPORT_FILE: &'static str = "payments.csv";

    fn fields(_lang: Lang) -> Vec<FieldSpec<Payment>> {
        vec![
            FieldSpec::new(
                "student_name",
                "payment.student_name",
                |p: &Payment| json!(p.student_name),
            )
            .sort_by("student.full_name"),
            FieldSpec::new("concept", "payment.concept", |p: &Payment| {
                json!(p.concept)
            }),
            FieldSpec::new("amount", "payment.amount", |p: &Payment| {
                json!(p.amount)
            })
            .sortable()
            .format_with(|p| format_money(p.amount)),
            FieldSpec::new("late_fee", "payment.late_fee", |p: &Payment| {
                json!(p.late_fee)
            })
            .format_with(|p| format_money(p.late_fee)),
            FieldSpec::new("status", "payment.status", |p: &Payment| {
                json!(p.status)
            })
            .sortable(),
            FieldSpec::new("paid_at", "payment.paid_at", |p: &Payment| {
                json!(p.paid_at)
            })
            .sortable()
            .format_with(|p| {
                p.paid_at.map(format_timestamp).unwrap_or_default()
            }),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("student_name", "filters.search", FilterKind::Text),
            FilterSpec::new("status", "payment.status", FilterKind::Text),
            FilterSpec::new(
                "paid_at",
                "payment.paid_at",
                FilterKind::DateRange,
            ),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &[
            "student_name",
            "concept",
            "amount",
            "late_fee",
            "status",
            "paid_at",
        ]
    }
}

pub struct PaymentRequests;

impl EntityList for PaymentRequests {
    type Record = PaymentRequest;

    const PATH: ListPath = ListPath::PAYMENT_REQUESTS;
    const TITLE_KEY: &'static str = "nav.payment_requests";
    const LABEL_PREFIX: &'static str = "payment_request";
    const EXPORT_FILE: &'static str = "payment_requests.csv";

    fn fields(_lang: Lang) -> Vec<FieldSpec<PaymentRequest>> {
        vec![
            FieldSpec::new(
                "concept",
                "payment_request.concept",
                |r: &PaymentRequest| json!(r.concept),
            )
            .sortable(),
            FieldSpec::new(
                "amount",
                "payment_request.amount",
                |r: &PaymentRequest| json!(r.amount),
            )
            .sortable()
            .format_with(|r| format_money(r.amount)),
            FieldSpec::new(
                "due_date",
                "payment_request.due_date",
                |r: &PaymentRequest| json!(r.due_date),
            )
            .sortable()
            .format_with(|r| format_date(r.due_date)),
            FieldSpec::new(
                "recipients",
                "payment_request.recipients",
                |r: &PaymentRequest| json!(r.recipients),
            ),
            FieldSpec::new(
                "paid_count",
                "payment_request.paid_count",
                |r: &PaymentRequest| json!(r.paid_count),
            ),
            FieldSpec::new(
                "status",
                "payment_request.status",
                |r: &PaymentRequest| json!(r.status),
            )
            .sortable(),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("concept", "filters.search", FilterKind::Text),
            FilterSpec::new(
                "due_date",
                "payment_request.due_date",
                FilterKind::DateRange,
            ),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &[
            "concept",
            "amount",
            "due_date",
            "recipients",
            "paid_count",
            "status",
        ]
    }
}

pub struct CoffeeSales;

impl EntityList for CoffeeSales {
    type Record = CoffeeSale;

    const PATH: ListPath = ListPath::COFFEE_SALES;
    const TITLE_KEY: &'static str = "nav.coffee_sales";
    const LABEL_PREFIX: &'static str = "coffee_sale";
    const EXPORT_FILE: &'static str = "coffee_sales.csv";

    fn fields(_lang: Lang) -> Vec<FieldSpec<CoffeeSale>> {
        vec![
            FieldSpec::new(
                "buyer_name",
                "coffee_sale.buyer_name",
                |s: &CoffeeSale| json!(s.buyer_name),
            )
            .sortable(),
            FieldSpec::new("items", "coffee_sale.items", |s: &CoffeeSale| {
                json!(s.items)
            }),
            FieldSpec::new("total", "coffee_sale.total", |s: &CoffeeSale| {
                json!(s.total)
            })
            .sortable()
            .format_with(|s| format_money(s.total)),
            FieldSpec::new(
                "payment_method",
                "coffee_sale.payment_method",
                |s: &CoffeeSale| json!(s.payment_method),
            ),
            FieldSpec::new(
                "sold_at",
                "coffee_sale.sold_at",
                |s: &CoffeeSale| json!(s.sold_at),
            )
            .sortable()
            .format_with(|s| format_timestamp(s.sold_at)),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("buyer_name", "filters.search", FilterKind::Text),
            FilterSpec::new(
                "payment_method",
                "coffee_sale.payment_method",
                FilterKind::Text,
            ),
            FilterSpec::new(
                "sold_at",
                "coffee_sale.sold_at",
                FilterKind::DateRange,
            ),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &["buyer_name", "items", "total", "payment_method", "sold_at"]
    }
}

pub struct MenuItems;

impl EntityList for MenuItems {
    type Record = MenuItem;

    const PATH: ListPath = ListPath::MENU_ITEMS;
    const TITLE_KEY: &'static str = "nav.menu_items";
    const LABEL_PREFIX: &'static str = "menu_item";
    const EXPORT_FILE: &'static str = "menu_items.csv";

    fn fields(lang: Lang) -> Vec<FieldSpec<MenuItem>> {
        vec![
            FieldSpec::new("code", "menu_item.code", |m: &MenuItem| {
                json!(m.code)
            })
            .sortable(),
            FieldSpec::new("name", "menu_item.name", |m: &MenuItem| {
                json!(m.name)
            })
            .sortable(),
            FieldSpec::new("price", "menu_item.price", |m: &MenuItem| {
                json!(m.price)
            })
            .sortable()
            .format_with(|m| format_money(m.price)),
            FieldSpec::new("category", "menu_item.category", |m: &MenuItem| {
                json!(m.category)
            })
            .sortable(),
            FieldSpec::new("available", "menu_item.available", |m: &MenuItem| {
                json!(m.available)
            })
            .format_with(move |m| yes_no(lang, m.available)),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("name", "filters.search", FilterKind::Text),
            FilterSpec::new("category", "menu_item.category", FilterKind::Text),
            FilterSpec::new(
                "available",
                "menu_item.available",
                FilterKind::Flag,
            ),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &["code", "name", "price", "category", "available"]
    }
}

pub struct BalanceRecharges;

impl EntityList for BalanceRecharges {
    type Record = BalanceRecharge;

    const PATH: ListPath = ListPath::BALANCE_RECHARGES;
    const TITLE_KEY: &'static str = "nav.balance_recharges";
    const LABEL_PREFIX: &'static str = "recharge";
    const EXPORT_FILE: &'static str = "balance_recharges.csv";

    fn fields(_lang: Lang) -> Vec<FieldSpec<BalanceRecharge>> {
        vec![
            FieldSpec::new(
                "student_name",
                "recharge.student_name",
                |r: &BalanceRecharge| json!(r.student_name),
            )
            .sort_by("student.full_name"),
            FieldSpec::new(
                "amount",
                "recharge.amount",
                |r: &BalanceRecharge| json!(r.amount),
            )
            .sortable()
            .format_with(|r| format_money(r.amount)),
            FieldSpec::new(
                "method",
                "recharge.method",
                |r: &BalanceRecharge| json!(r.method),
            ),
            FieldSpec::new(
                "reference",
                "recharge.reference",
                |r: &BalanceRecharge| json!(r.reference),
            ),
            FieldSpec::new(
                "created_at",
                "recharge.created_at",
                |r: &BalanceRecharge| json!(r.created_at),
            )
            .sortable()
            .format_with(|r| format_timestamp(r.created_at)),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::new("student_name", "filters.search", FilterKind::Text),
            FilterSpec::new("method", "recharge.method", FilterKind::Text),
            FilterSpec::new(
                "created_at",
                "recharge.created_at",
                FilterKind::DateRange,
            ),
        ]
    }

    fn export_keys() -> &'static [&'static str] {
        &["student_name", "amount", "method", "reference", "created_at"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use list_view::{build_columns, build_export_descriptor};
    use std::collections::HashSet;

    fn check_tables<E: EntityList>() {
        for lang in Lang::ALL {
            let fields = E::fields(lang);
            let names: HashSet<_> =
                fields.iter().map(|field| field.name).collect();
            assert_eq!(names.len(), fields.len(), "{}", E::PATH);

            for field in &fields {
                assert_ne!(
                    translate(lang, field.label_key),
                    field.label_key,
                    "missing label for {}",
                    field.label_key
                );
            }
            for filter in E::filters() {
                assert_ne!(translate(lang, filter.label_key), filter.label_key);
            }

            let descriptor = build_export_descriptor(E::export_keys(), |key| {
                E::export_label(lang, key)
            });
            for (key, label) in descriptor.headers() {
                assert_ne!(label, format!("{}.{key}", E::LABEL_PREFIX));
            }
        }

        let defaults = E::default_filters();
        assert_eq!(defaults.len(), E::filters().len());
        assert!(defaults.values().all(FilterValue::is_empty));
    }

    #[test]
    fn every_entity_table_is_complete() {
        check_tables::<Students>();
        check_tables::<Teachers>();
        check_tables::<Users>();
        check_tables::<Classes>();
        check_tables::<Payments>();
        check_tables::<PaymentRequests>();
        check_tables::<CoffeeSales>();
        check_tables::<MenuItems>();
        check_tables::<BalanceRecharges>();
    }

    fn student() -> anyhow::Result<Student> {
        Ok(serde_json::from_value(json!({
            "id": "6f1c3f0e-8d7b-4a52-9b3e-0d6b1b9f2a11",
            "school_id": "0b2f5e4c-1a3d-4c6e-8f9a-7b5d3c1e2f40",
            "full_name": "Ana Pérez",
            "identity_document": null,
            "class_name": "3A",
            "grade": "3",
            "balance": "12.5",
            "enabled": false,
            "created_at": "2024-03-01T14:30:00Z",
        }))?)
    }

    #[test]
    fn student_cells_are_formatted() -> anyhow::Result<()> {
        let student = student()?;
        let columns =
            build_columns(&Students::fields(Lang::Es), |key| {
                translate(Lang::Es, key)
            });
        let cell = |name: &str| {
            columns
                .iter()
                .find(|column| column.name == name)
                .map(|column| column.render(&student))
        };

        assert_eq!(cell("full_name").as_deref(), Some("Ana Pérez"));
        assert_eq!(cell("identity_document").as_deref(), Some(""));
        assert_eq!(cell("balance").as_deref(), Some("12.50"));
        assert_eq!(cell("enabled").as_deref(), Some("No"));
        assert_eq!(columns[0].label, "Nombre");

        Ok(())
    }

    #[test]
    fn class_column_sorts_by_backend_field() {
        let columns =
            build_columns(&Students::fields(Lang::En), str::to_string);
        let class = columns.iter().find(|column| column.name == "class_name");
        assert_eq!(
            class.and_then(|column| column.sort_key.as_deref()),
            Some("class.name")
        );
        let document =
            columns.iter().find(|column| column.name == "identity_document");
        assert!(document.is_some_and(|column| !column.is_sortable()));
    }
}
