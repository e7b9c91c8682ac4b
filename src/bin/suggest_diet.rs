//! Utility to print a diet plan recommendation for one patient

use std::path::PathBuf;

use ifm::tools::plans;

fn get_dataset_path() -> PathBuf {
    std::env::var("IFM_DATASET_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("data");
            path.push("patients.csv");
            path
        })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dataset_path = get_dataset_path();
    println!("Dataset path: {}", dataset_path.display());

    let dataset = ifm::dataset::PatientDataset::load(&dataset_path)?;
    println!("Loaded {} patients", dataset.len());

    // Patient number from the command line; no argument means no selection
    let selection: i64 = match std::env::args().nth(1) {
        None => 0,
        Some(arg) => match arg.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("{}", plans::INVALID_SELECTION);
                std::process::exit(1);
            }
        },
    };

    match plans::recommend_for_patient(&dataset, selection) {
        Ok(rec) => {
            println!();
            println!("Patient: {}", rec.patient_name);
            println!("  {:<18} {}", "Diet Name:", rec.diet_name);
            println!("  {:<18} {}", "Description:", rec.description);
            println!("  {:<18} {}", "Meal Timings:", rec.meal_timings);
            println!("  {:<18} {}", "Recommended Foods:", rec.recommended_foods);
            println!("  {:<18} {}", "Fasting Schedule:", rec.fasting_schedule);
        }
        Err(rejected) => {
            eprintln!("{}", rejected.error);
            eprintln!("Available patients:");
            for (i, record) in dataset.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, record.name);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
