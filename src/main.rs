mod args;
mod config;
mod reader;
mod writer;

use bank::{input::InputCommand, Ledger, Result, Session};

fn main() -> Result {
    let app_config = config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let ledger = match app_config.seed {
        Some(seed) => Ledger::seeded(seed),
        None => Ledger::new(),
    };
    let mut session = Session::new(ledger);

    process_commands(&mut session)?;

    log::debug!(
        "Application finished successfully with {} accounts!",
        session.ledger().len()
    );

    Ok(())
}

/// Read the command file, run every command against the session and report outcomes to stdout
fn process_commands(session: &mut Session) -> Result {
    let input_path = args::parse_input_arg()?;
    log::debug!("Found filepath as input arg: {input_path:?}");

    let mut rdr = reader::build_csv_reader(input_path)?;
    let mut wtr = writer::build_csv_writer();

    log::debug!("Deserializing reader...");
    for record in rdr.deserialize::<InputCommand>() {
        let input_command = match record {
            Ok(input_command) => input_command,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing input_command into Operation: {:?}", input_command.op);
        let operation = match input_command.parse_operation() {
            Ok(operation) => operation,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        for outcome in session.execute(operation) {
            wtr.serialize(outcome)?;
        }
    }

    wtr.flush()?;

    Ok(())
}
