//! End-to-end smoke tests over a temp-dir project.

use std::path::PathBuf;

use sf_app::{AppError, load_project, run_pipeline};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "{prefix}_{}_{:?}",
        std::process::id(),
        std::thread::current().id()
    ));
    dir
}

fn write_budget_project(dir: &PathBuf) -> PathBuf {
    std::fs::create_dir_all(dir).expect("failed to create temp dir");

    std::fs::write(
        dir.join("expenses.csv"),
        "cat1,cat2,Jan\n\
         Food,Groceries,50\n\
         Food,Groceries,30\n\
         Food,,20\n\
         Rent,,300\n",
    )
    .expect("write expenses");

    std::fs::write(
        dir.join("income.csv"),
        "cat1,Jan\n\
         Salary,400\n\
         Interest,\n",
    )
    .expect("write income");

    let project_path = dir.join("budget.yaml");
    std::fs::write(
        &project_path,
        r#"
version: 1
name: household budget
currency: "€"
datasets:
  - id: income
    path: income.csv
    metric: Jan
    categories: [cat1]
    end_anchor: Total
  - id: expenses
    path: expenses.csv
    metric: Jan
    categories: [cat1, cat2]
    start_anchor: Total
merge:
  first: income
  second: expenses
  first_anchor: Total
  second_anchor: Total
"#,
    )
    .expect("write project");

    project_path
}

#[test]
fn budget_pipeline_end_to_end() {
    let dir = unique_temp_dir("sf_app_budget");
    let project_path = write_budget_project(&dir);

    let data = run_pipeline(&project_path).expect("pipeline should succeed");

    // Income: Salary -> Total (400); Interest has no metric, so it is a
    // node without edges. Expenses: Total -> Food (100), Food -> Groceries
    // (80), Total -> Rent (300).
    // Income labels: [Salary, Total, Interest]; expense labels minus its
    // anchor append after.
    assert_eq!(
        data.labels.len(),
        6, // Salary, Total, Interest, Food, Groceries, Rent
    );
    assert_eq!(data.link_count(), 4);

    assert!(data.labels[0].starts_with("Salary"));
    assert!(data.labels[1].starts_with("Total"));
    assert!(data.labels[2].starts_with("Interest"));

    // Totals land in the annotated labels with the currency suffix.
    assert_eq!(data.labels[0], "Salary \n400€");
    assert_eq!(data.labels[1], "Total \n400€");
    assert_eq!(data.labels[2], "Interest \n0€");

    // Every link index is in bounds and no self-loops survived.
    for k in 0..data.link_count() {
        assert!(data.source[k] < data.labels.len());
        assert!(data.target[k] < data.labels.len());
        assert_ne!(data.source[k], data.target[k]);
    }

    // Weight conservation across the whole pipeline: 400 from the income
    // edge plus 100 + 80 + 300 from the aggregated expense edges.
    let total: f64 = data.values.iter().sum();
    assert_eq!(total, 880.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn single_dataset_skips_merge() {
    let dir = unique_temp_dir("sf_app_single");
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    std::fs::write(dir.join("expenses.csv"), "cat1,Jan\nFood,25\nRent,75\n")
        .expect("write expenses");

    let project_path = dir.join("expenses.yaml");
    std::fs::write(
        &project_path,
        r#"
version: 1
name: expenses only
datasets:
  - id: expenses
    path: expenses.csv
    metric: Jan
    categories: [cat1]
    start_anchor: Total
"#,
    )
    .expect("write project");

    let data = run_pipeline(&project_path).expect("pipeline should succeed");
    assert_eq!(data.labels.len(), 3); // Total, Food, Rent
    assert_eq!(data.link_count(), 2);
    assert_eq!(data.labels[0], "Total \n100€");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn multiple_datasets_without_merge_is_invalid() {
    let dir = unique_temp_dir("sf_app_nomerge");
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    std::fs::write(dir.join("a.csv"), "cat1,Jan\nX,1\n").expect("write a");
    std::fs::write(dir.join("b.csv"), "cat1,Jan\nY,2\n").expect("write b");

    let project_path = dir.join("p.yaml");
    std::fs::write(
        &project_path,
        r#"
version: 1
name: two datasets
datasets:
  - id: a
    path: a.csv
    metric: Jan
    categories: [cat1]
  - id: b
    path: b.csv
    metric: Jan
    categories: [cat1]
"#,
    )
    .expect("write project");

    let err = run_pipeline(&project_path).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn metric_column_absent_is_fatal() {
    let dir = unique_temp_dir("sf_app_badmetric");
    std::fs::create_dir_all(&dir).expect("failed to create temp dir");

    std::fs::write(dir.join("data.csv"), "cat1,Jan\nFood,10\n").expect("write data");
    let project_path = dir.join("p.yaml");
    std::fs::write(
        &project_path,
        r#"
version: 1
name: bad metric
datasets:
  - id: data
    path: data.csv
    metric: Feb
    categories: [cat1]
"#,
    )
    .expect("write project");

    let err = run_pipeline(&project_path).unwrap_err();
    assert!(matches!(err, AppError::Graph(_)));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unsupported_extension_rejected() {
    let err = load_project(std::path::Path::new("project.toml")).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedExtension(_)));
}
