//! Address Book - Main entry point
//!
//! Loads configuration, installs logging and runs a short walkthrough of the
//! directory operations against the configured startup directory.

use address_book::{
    Config, Contact, ContactField, ContactUpdate, Directory, DirectoryRegistry, NewContact,
};
use anyhow::Result;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; contact listings go to stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut registry = DirectoryRegistry::new();
    let directory = registry.create(&config.default_directory)?;

    if !config.seed_demo {
        info!("Demo walkthrough disabled; nothing to do");
        return Ok(());
    }

    run_walkthrough(directory)?;

    // Creating the same name again is reported, not fatal
    if let Err(e) = registry.create(&config.default_directory) {
        warn!("{}", e);
    }

    info!("Address book walkthrough complete");
    Ok(())
}

fn run_walkthrough(directory: &mut Directory) -> Result<()> {
    for fields in reference_contacts() {
        match Contact::new(fields) {
            Ok(contact) => {
                if let Err(e) = directory.add(contact) {
                    warn!("{}", e);
                }
            }
            Err(e) => error!("Rejected contact: {}", e),
        }
    }

    print_directory(directory);

    let state = "Madhya Pradesh";
    println!("\nContacts in {}: {}", state, directory.count_by_state(state));
    for contact in directory.search_by_city("Bhopal") {
        println!("In Bhopal: {}", contact.full_name());
    }

    let update = ContactUpdate::new()
        .set(ContactField::City, "Mumbai")
        .set(ContactField::Email, "bad-email");
    let report = directory.update("Mokshini", &update)?;
    for rejected in &report.rejected {
        println!("Update skipped: {}", rejected);
    }

    directory.remove("Bhavesh")?;
    println!("Contacts in {} after removal: {}", state, directory.count_by_state(state));

    directory.sort_by_first_name();
    print_directory(directory);

    let counts = directory.aggregate_counts();
    println!("\nBy city: {:?}", counts.by_city);
    println!("By state: {:?}", counts.by_state);
    Ok(())
}

fn print_directory(directory: &Directory) {
    println!("\n--- {} ({} contacts) ---", directory.name(), directory.len());
    for (index, contact) in directory.iter().enumerate() {
        println!("{}. {}", index + 1, contact.display_line());
    }
}

fn reference_contacts() -> Vec<NewContact> {
    vec![
        NewContact {
            first_name: "Mokshini".to_string(),
            last_name: "Baglekar".to_string(),
            address: "12 Arera Colony".to_string(),
            city: "Bhopal".to_string(),
            state: "Madhya Pradesh".to_string(),
            zip: "400001".to_string(),
            phone_number: "9301000083".to_string(),
            email: "mokshini.baglekar@gmail.com".to_string(),
        },
        NewContact {
            first_name: "Bhavesh".to_string(),
            last_name: "Malviya".to_string(),
            address: "45 Vijay Nagar".to_string(),
            city: "Indore".to_string(),
            state: "Madhya Pradesh".to_string(),
            zip: "110001".to_string(),
            phone_number: "7690000686".to_string(),
            email: "bhavesh.malviya@gmail.com".to_string(),
        },
    ]
}
