use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::server::{
    error::AppError,
    model::report::RevenueReport,
    util::{money::format_brl, time::format_datetime_local},
};

/// Builds the download filename for a report export.
///
/// # Arguments
/// - `report` - The report being exported
/// - `extension` - File extension without the dot
pub fn export_filename(report: &RevenueReport, extension: &str) -> String {
    format!(
        "revenue-report-{}-{}.{}",
        report.from.format("%Y-%m-%d"),
        report.to.format("%Y-%m-%d"),
        extension
    )
}

/// Renders a revenue report as CSV.
///
/// Sections follow the on-screen report and are separated by blank lines, so
/// the file opens cleanly in a spreadsheet. Amounts are formatted as currency;
/// the decimal comma means those cells come out quoted.
///
/// # Arguments
/// - `report` - The report to render
///
/// # Returns
/// - `Ok(Vec<u8>)` - The CSV file contents
/// - `Err(AppError::CsvErr)` - Serialization error
pub fn revenue_report_csv(report: &RevenueReport) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);

    writer.write_record(["Revenue report".to_string()])?;
    writer.write_record([
        "Period".to_string(),
        report.from.format("%Y-%m-%d").to_string(),
        report.to.format("%Y-%m-%d").to_string(),
    ])?;
    writer.write_record([""])?;

    writer.write_record(["Summary".to_string()])?;
    writer.write_record(["Revenue".to_string(), format_brl(report.summary.revenue_cents)])?;
    writer.write_record([
        "Appointments".to_string(),
        report.summary.appointment_count.to_string(),
    ])?;
    writer.write_record(["Collected".to_string(), format_brl(report.summary.paid_cents)])?;
    writer.write_record([
        "Outstanding".to_string(),
        format_brl(report.summary.outstanding_cents),
    ])?;
    writer.write_record([""])?;

    writer.write_record(["Daily revenue".to_string()])?;
    writer.write_record(["Date".to_string(), "Collected".to_string()])?;
    for day in &report.daily {
        writer.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            format_brl(day.revenue_cents),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record(["By payment method".to_string()])?;
    writer.write_record([
        "Method".to_string(),
        "Collected".to_string(),
        "Transactions".to_string(),
    ])?;
    for method in &report.methods {
        writer.write_record([
            method.method.label().to_string(),
            format_brl(method.amount_cents),
            method.transaction_count.to_string(),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record(["Top doctors".to_string()])?;
    writer.write_record([
        "Doctor".to_string(),
        "Revenue".to_string(),
        "Appointments".to_string(),
    ])?;
    for doctor in &report.top_doctors {
        writer.write_record([
            doctor.doctor_name.clone(),
            format_brl(doctor.revenue_cents),
            doctor.appointment_count.to_string(),
        ])?;
    }
    writer.write_record([""])?;

    writer.write_record(["Recent transactions".to_string()])?;
    writer.write_record([
        "Recorded".to_string(),
        "Patient".to_string(),
        "Method".to_string(),
        "Amount".to_string(),
    ])?;
    for transaction in &report.recent_transactions {
        writer.write_record([
            format_datetime_local(transaction.created_at),
            transaction.patient_name.clone(),
            transaction.method.label().to_string(),
            format_brl(transaction.amount_cents as i64),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::CsvErr(e.into_error().into()))
}

/// Cursor for laying out report lines top to bottom across A4 pages.
struct ReportPage<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl<'a> ReportPage<'a> {
    fn line(&mut self, text: &str, size: f32, x: Mm, advance: Mm, font: &IndirectFontRef) {
        if self.y < Mm(20.0) {
            let (page, layer) = self.doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(280.0);
        }

        self.layer.use_text(text, size, x, self.y, font);
        self.y -= advance;
    }

    fn gap(&mut self, advance: Mm) {
        self.y -= advance;
    }
}

/// Renders a revenue report as a PDF document.
///
/// Mirrors the CSV layout on A4 pages with the built-in Helvetica faces, so
/// no font files ship with the server.
///
/// # Arguments
/// - `report` - The report to render
///
/// # Returns
/// - `Ok(Vec<u8>)` - The PDF file contents
/// - `Err(AppError::InternalError)` - Font loading or document write failure
pub fn revenue_report_pdf(report: &RevenueReport) -> Result<Vec<u8>, AppError> {
    let title = format!(
        "Revenue report {} to {}",
        report.from.format("%Y-%m-%d"),
        report.to.format("%Y-%m-%d")
    );
    let (doc, first_page, first_layer) = PdfDocument::new(&title, Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::InternalError(format!("PDF font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AppError::InternalError(format!("PDF font error: {e}")))?;

    let mut page = ReportPage {
        doc: &doc,
        layer: doc.get_page(first_page).get_layer(first_layer),
        y: Mm(280.0),
    };

    page.line("Revenue report", 16.0, Mm(20.0), Mm(7.0), &bold);
    page.line(
        &format!(
            "{} to {}",
            report.from.format("%d/%m/%Y"),
            report.to.format("%d/%m/%Y")
        ),
        10.0,
        Mm(20.0),
        Mm(10.0),
        &font,
    );

    page.line("Summary", 12.0, Mm(20.0), Mm(6.0), &bold);
    page.line(
        &format!("Revenue: {}", format_brl(report.summary.revenue_cents)),
        10.0,
        Mm(25.0),
        Mm(5.0),
        &font,
    );
    page.line(
        &format!("Appointments: {}", report.summary.appointment_count),
        10.0,
        Mm(25.0),
        Mm(5.0),
        &font,
    );
    page.line(
        &format!("Collected: {}", format_brl(report.summary.paid_cents)),
        10.0,
        Mm(25.0),
        Mm(5.0),
        &font,
    );
    page.line(
        &format!("Outstanding: {}", format_brl(report.summary.outstanding_cents)),
        10.0,
        Mm(25.0),
        Mm(5.0),
        &font,
    );
    page.gap(Mm(4.0));

    if !report.daily.is_empty() {
        page.line("Daily revenue", 12.0, Mm(20.0), Mm(6.0), &bold);
        for day in &report.daily {
            page.line(
                &format!(
                    "{}  {}",
                    day.date.format("%d/%m/%Y"),
                    format_brl(day.revenue_cents)
                ),
                10.0,
                Mm(25.0),
                Mm(5.0),
                &font,
            );
        }
        page.gap(Mm(4.0));
    }

    if !report.methods.is_empty() {
        page.line("By payment method", 12.0, Mm(20.0), Mm(6.0), &bold);
        for method in &report.methods {
            page.line(
                &format!(
                    "{}  {}  ({} transactions)",
                    method.method.label(),
                    format_brl(method.amount_cents),
                    method.transaction_count
                ),
                10.0,
                Mm(25.0),
                Mm(5.0),
                &font,
            );
        }
        page.gap(Mm(4.0));
    }

    if !report.top_doctors.is_empty() {
        page.line("Top doctors", 12.0, Mm(20.0), Mm(6.0), &bold);
        for doctor in &report.top_doctors {
            page.line(
                &format!(
                    "{}  {}  ({} appointments)",
                    doctor.doctor_name,
                    format_brl(doctor.revenue_cents),
                    doctor.appointment_count
                ),
                10.0,
                Mm(25.0),
                Mm(5.0),
                &font,
            );
        }
        page.gap(Mm(4.0));
    }

    if !report.recent_transactions.is_empty() {
        page.line("Recent transactions", 12.0, Mm(20.0), Mm(6.0), &bold);
        for transaction in &report.recent_transactions {
            page.line(
                &format!(
                    "{}  {}  {}  {}",
                    format_datetime_local(transaction.created_at),
                    transaction.patient_name,
                    transaction.method.label(),
                    format_brl(transaction.amount_cents as i64)
                ),
                10.0,
                Mm(25.0),
                Mm(5.0),
                &font,
            );
        }
    }

    let mut buffer = BufWriter::new(Vec::new());
    doc.save(&mut buffer)
        .map_err(|e| AppError::InternalError(format!("PDF save error: {e}")))?;
    buffer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("PDF buffer error: {e}")))
}
