use list_view::{
    Debouncer, RowCells, RowStatus, RowValidator, UploadError, UploadSheet,
    ValidationError,
};
use std::cell::RefCell;
use std::rc::Rc;
use tokio::time::{Duration, sleep};

#[derive(Debug, Clone, PartialEq)]
struct NewStudent {
    full_name: String,
    identity_document: String,
    grade: u8,
}

struct StudentRows;

impl RowValidator for StudentRows {
    type Record = NewStudent;

    fn validate(
        &self,
        row: usize,
        cells: &RowCells,
    ) -> Result<NewStudent, Vec<ValidationError>> {
        let cell = |name: &str| cells.get(name).map(String::as_str);
        let mut errors = Vec::new();

        let full_name = cell("full_name").unwrap_or_default();
        if full_name.is_empty() {
            errors.push(ValidationError::for_field(
                row,
                "full_name",
                "name is required",
            ));
        }
        let identity_document = cell("identity_document").unwrap_or_default();
        if identity_document.is_empty() {
            errors.push(ValidationError::for_field(
                row,
                "identity_document",
                "identity document is required",
            ));
        }
        let grade = match cell("grade").unwrap_or_default().parse::<u8>() {
            Ok(grade @ 1..=12) => Some(grade),
            _ => {
                errors.push(ValidationError::for_field(
                    row,
                    "grade",
                    "grade must be between 1 and 12",
                ));
                None
            }
        };

        match grade {
            Some(grade) if errors.is_empty() => Ok(NewStudent {
                full_name: full_name.to_string(),
                identity_document: identity_document.to_string(),
                grade,
            }),
            _ => Err(errors),
        }
    }
}

const SHEET: &str = "\
full_name,identity_document,grade
Ana Pérez, V-100 ,3
,V-200,4
Luis Gómez,V-300
";

#[test]
fn rows_are_validated_independently() -> anyhow::Result<()> {
    let sheet = UploadSheet::from_csv(SHEET.as_bytes(), &StudentRows)?;

    assert_eq!(sheet.headers(), ["full_name", "identity_document", "grade"]);
    assert_eq!(sheet.len(), 3);
    assert_eq!(
        sheet.eligible_records(),
        vec![&NewStudent {
            full_name: "Ana Pérez".into(),
            identity_document: "V-100".into(),
            grade: 3,
        }]
    );

    let errors = sheet.errors();
    assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(errors[&1][0].field.as_deref(), Some("full_name"));
    assert_eq!(
        errors[&2][0].to_string(),
        "row 3: grade must be between 1 and 12"
    );
    assert_eq!(sheet.error_count(), 2);

    // A short row is padded with empty cells.
    assert_eq!(sheet.rows()[2].cells["grade"], "");

    Ok(())
}

#[test]
fn blank_header_is_rejected() {
    let csv = ",,\nAna,V-1,3\n";
    let result = UploadSheet::from_csv(csv.as_bytes(), &StudentRows);

    assert!(matches!(result, Err(UploadError::MissingHeader)));
}

#[test]
fn edited_row_is_stale_until_revalidated() -> anyhow::Result<()> {
    let mut sheet = UploadSheet::from_csv(SHEET.as_bytes(), &StudentRows)?;

    assert!(sheet.edit_cell(1, "full_name", "María Rojas"));
    assert!(!sheet.edit_cell(9, "full_name", "Nobody"));
    assert!(sheet.has_stale_rows());
    assert_eq!(sheet.rows()[1].status, RowStatus::Stale);
    assert!(sheet.errors_for(1).is_empty());
    assert_eq!(sheet.eligible_records().len(), 1);

    sheet.revalidate(1, &StudentRows);

    assert!(!sheet.has_stale_rows());
    assert_eq!(sheet.eligible_records().len(), 2);
    assert_eq!(sheet.errors_for(2).len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn debounced_revalidation_checks_the_final_value() -> anyhow::Result<()> {
    let sheet = Rc::new(RefCell::new(UploadSheet::from_csv(
        SHEET.as_bytes(),
        &StudentRows,
    )?));
    let debouncer = Debouncer::new();

    let mut scheduled = Vec::new();
    for grade in ["1", "13", "7"] {
        sheet.borrow_mut().edit_cell(2, "grade", grade);
        let sheet = sheet.clone();
        scheduled.push(debouncer.schedule(2usize, async move {
            sleep(Duration::from_millis(300)).await;
            sheet.borrow_mut().revalidate(2, &StudentRows);
        }));
    }

    let outcomes = futures::future::join_all(scheduled).await;

    assert_eq!(outcomes.iter().filter(|ran| ran.is_some()).count(), 1);
    let sheet = sheet.borrow();
    assert!(sheet.errors_for(2).is_empty());
    assert!(matches!(
        &sheet.rows()[2].status,
        RowStatus::Valid(student) if student.grade == 7
    ));

    Ok(())
}
