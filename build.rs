use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/benchmark_scores.csv");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the benchmark catalog before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let mut lines = catalog_contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing header row\n\
             Path: {}\n",
            catalog_path.display()
        );
    });

    let model_count = validate_header(header);
    let dataset_count = validate_rows(lines, model_count);

    println!(
        "cargo:warning=Validated benchmark catalog: {model_count} models, {dataset_count} datasets"
    );
}

fn validate_header(header: &str) -> usize {
    let columns: Vec<&str> = header.split(',').collect();
    assert!(
        columns.len() >= 4,
        "\n\nCATALOG BUILD ERROR: Header must list at least one model after the first three columns\n\
         Got: {header}\n"
    );

    let models = &columns[3..];
    for (i, model) in models.iter().enumerate() {
        assert!(
            !model.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Model column {} has an empty name\n",
            i + 4
        );
    }
    models.len()
}

fn validate_rows<'a>(rows: impl Iterator<Item = &'a str>, model_count: usize) -> usize {
    let mut datasets = 0;

    for row in rows {
        let columns: Vec<&str> = row.split(',').collect();
        if columns.len() < 4 {
            println!("cargo:warning=Catalog row has fewer than 4 columns and will be skipped: {row}");
            continue;
        }

        let dataset = columns[1].trim();
        assert!(
            !dataset.is_empty(),
            "\n\nCATALOG BUILD ERROR: Row is missing its dataset label\n\
             Row: {row}\n"
        );

        // Short rows zero-fill the remaining models and extra values are ignored
        let value_count = columns.len() - 3;
        if value_count != model_count {
            println!(
                "cargo:warning=Dataset '{dataset}' has {value_count} values for {model_count} models"
            );
        }

        datasets += 1;
    }

    datasets
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/benchmark_scores.csv");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
