use chrono::NaiveDate;
use crab_ledger::engine::{InputRecord, TransactionList, TransactionSnapshot};
use csv::Trim;
use simple_logger::SimpleLogger;
use std::io::Read;
use std::{env, error::Error};

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new().env().init()?;

    log::debug!("Application started");

    let date_filter = get_date_filter()?;

    log::debug!("Transactions loading: Starting");
    let list = load_transactions(std::io::stdin().lock())?;
    log::debug!("Transactions loading: Done");

    log_summary(&list);

    log::debug!("Exporting transaction snapshots to stdout: Started");
    let snapshots: Vec<TransactionSnapshot> = match date_filter {
        Some(date) => list
            .transactions_on_a_date(date)
            .into_iter()
            .map(TransactionSnapshot::of)
            .collect(),
        None => list.snapshots().collect(),
    };
    write_to_std_out(&snapshots)?;
    log::debug!("Exporting transaction snapshots to stdout: Done");

    log::debug!("Application finished");

    Ok(())
}

/// Optional first argument: only print transactions made on this date (YYYY-MM-DD).
fn get_date_filter() -> Result<Option<NaiveDate>, Box<dyn Error>> {
    match env::args_os().nth(1) {
        None => Ok(None),
        Some(arg) => {
            let arg = arg
                .into_string()
                .map_err(|a| format!("date argument is not valid unicode: {a:?}"))?;
            let date = NaiveDate::parse_from_str(arg.trim(), "%Y-%m-%d")?;
            log::debug!("Filtering output on date: {date}");
            Ok(Some(date))
        }
    }
}

fn load_transactions<R: Read>(reader: R) -> Result<TransactionList, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut list = TransactionList::new();

    log::debug!("Started deserialising records");
    for (line, result) in rdr.deserialize::<InputRecord>().enumerate() {
        log::debug!("Deserialising record into InputRecord: {result:?}");
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Error deserializing record:{e}");
                continue;
            }
        };
        if let Err(e) = list.add_record(&record) {
            log::warn!("Error adding record #{} ({:?}): {}", line + 1, record.typ, e);
        }
    }
    Ok(list)
}

fn log_summary(list: &TransactionList) {
    log::info!("Transactions held: {}", list.len());
    log::info!("Total transaction cost: {:.4}", list.total_transaction_cost());
    match list.frequent_transaction_type() {
        Some(kind) => log::info!("Most frequent transaction type: {kind}"),
        None => log::info!("Most frequent transaction type: none"),
    }
}

pub fn write_to_std_out(snapshots: &[TransactionSnapshot]) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());

    log::debug!("Starting transaction snapshot serialisation");
    for snapshot in snapshots {
        log::debug!("Serialising transaction snapshot: {snapshot:?}");
        wtr.serialize(snapshot)?;
    }

    log::debug!("Transaction snapshot serialisation done -> Flushing to stdout");
    wtr.flush()?;

    Ok(())
}
