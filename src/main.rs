use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use paydesk::application::dashboard::PaymentsDashboard;
use paydesk::application::store::LoadState;
use paydesk::domain::payment::{PaymentRecord, PaymentStatus};
use paydesk::domain::ports::PaymentSourceBox;
use paydesk::domain::query::{SortKey, StatusFilter};
use paydesk::domain::summary::SummaryTotals;
use paydesk::infrastructure::csv_source::CsvPaymentSource;
use paydesk::infrastructure::in_memory::InMemoryPaymentSource;
use paydesk::interfaces::csv::payment_writer::PaymentWriter;
use paydesk::interfaces::currency::CurrencyFormatter;
use paydesk::interfaces::export::{DocumentExporterBox, PdfExporter, TextExporter};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Pdf,
    Text,
}

#[derive(Parser)]
#[command(author, version, about = "List, filter and export payment records", long_about = None)]
struct Cli {
    /// Payments CSV file. Uses the built-in sample payments when omitted.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Artificial latency for the sample source, in milliseconds.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Case-insensitive search on id, customer and payment method.
    #[arg(long, default_value = "")]
    search: String,

    /// `all`, `paid`, `pending` or `failed`.
    #[arg(long, default_value = "all")]
    status: StatusFilter,

    /// Sort column; repeat to toggle direction (id, customer, date, method, amount, status).
    #[arg(long)]
    sort: Vec<SortKey>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Payment id to export instead of listing.
    #[arg(long)]
    export: Option<String>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Pdf)]
    export_format: ExportFormat,

    /// Directory the exported document is written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Serialize)]
struct JsonView<'a> {
    summary: &'a SummaryTotals,
    payments: &'a [PaymentRecord],
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source: PaymentSourceBox = match &cli.input {
        Some(path) => Box::new(CsvPaymentSource::new(path)),
        None => Box::new(
            InMemoryPaymentSource::sample().with_delay(Duration::from_millis(cli.delay_ms)),
        ),
    };
    let exporter: DocumentExporterBox = match cli.export_format {
        ExportFormat::Pdf => Box::new(PdfExporter::default()),
        ExportFormat::Text => Box::new(TextExporter::default()),
    };

    let mut dashboard = PaymentsDashboard::new(source, exporter);
    if dashboard.load().await == LoadState::FailedEmpty {
        eprintln!("WARNING: payments could not be loaded, showing an empty list.");
    }

    if let Some(id) = &cli.export {
        let artifact = dashboard.export_record(id).await.into_diagnostic()?;
        let path = artifact.save_to(&cli.out_dir).await.into_diagnostic()?;
        println!("{}", path.display());
        return Ok(());
    }

    dashboard.set_search_term(cli.search);
    dashboard.set_status_filter(cli.status);
    for key in cli.sort {
        dashboard.sort_by(key);
    }

    let summary = dashboard.summary().await;
    let visible = dashboard.visible().await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Csv => {
            PaymentWriter::new(out).write_payments(&visible).into_diagnostic()?;
        }
        OutputFormat::Json => {
            let view = JsonView {
                summary: &summary,
                payments: &visible,
            };
            serde_json::to_writer_pretty(&mut out, &view).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
        OutputFormat::Table => {
            write_table(&mut out, &summary, &visible).into_diagnostic()?;
        }
    }

    Ok(())
}

fn write_table(out: &mut impl Write, summary: &SummaryTotals, visible: &[PaymentRecord]) -> io::Result<()> {
    let money = CurrencyFormatter::inr();

    writeln!(
        out,
        "Total: {} (from {} transactions)",
        money.format(summary.total),
        summary.count
    )?;
    for status in PaymentStatus::ALL {
        writeln!(
            out,
            "{}: {} ({} of total)",
            status,
            money.format(summary.for_status(status)),
            summary.share_label(status)
        )?;
    }
    writeln!(out)?;

    if visible.is_empty() {
        writeln!(out, "No payments found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<10} {:<16} {:<10} {:<12} {:>14} {:<8}",
        "ID", "Customer", "Date", "Method", "Amount", "Status"
    )?;
    for payment in visible {
        writeln!(
            out,
            "{:<10} {:<16} {:<10} {:<12} {:>14} {:<8}",
            payment.id,
            payment.customer,
            payment.date,
            payment.method,
            money.format(payment.amount),
            payment.status
        )?;
    }
    Ok(())
}
