//! Render an invoice JSON file to PDF.
//!
//! ```text
//! cargo run --example render_invoice -- demos/invoice.json /path/to/Regular.ttf [/path/to/Bold.ttf] [out.pdf]
//! ```

use std::process::ExitCode;

use rechnung_pdf::core::*;
use rechnung_pdf::document::LayoutConfig;
use rechnung_pdf::pdf::generate_invoice;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, regular, rest @ ..] = args.as_slice() else {
        eprintln!("usage: render_invoice <invoice.json> <regular.ttf> [bold.ttf] [out.pdf]");
        return ExitCode::FAILURE;
    };
    let bold = rest.first().unwrap_or(regular);
    let output = rest.get(1).map(String::as_str).unwrap_or("invoice.pdf");

    let json = match std::fs::read_to_string(input) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("cannot read {input}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let invoice: InvoiceData = match serde_json::from_str(&json) {
        Ok(invoice) => invoice,
        Err(e) => {
            eprintln!("invalid invoice JSON: {e}");
            return ExitCode::FAILURE;
        }
    };

    let errors = validate_invoice(&invoice);
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {error}");
        }
        return ExitCode::FAILURE;
    }

    let (regular, bold) = match (std::fs::read(regular), std::fs::read(bold)) {
        (Ok(regular), Ok(bold)) => (regular, bold),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("cannot read font: {e}");
            return ExitCode::FAILURE;
        }
    };

    match generate_invoice(&invoice, &regular, &bold, &LayoutConfig::default()) {
        Ok(pdf) => {
            let pages = pdf.page_count();
            if let Err(e) = std::fs::write(output, pdf.into_bytes()) {
                eprintln!("cannot write {output}: {e}");
                return ExitCode::FAILURE;
            }
            println!("wrote {output} ({pages} page(s))");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("generation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
