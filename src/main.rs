//! # Maquette CLI
//!
//! Usage:
//!   maquette documento.json -o documento.pdf
//!   cat documento.json | maquette -o saida.pdf
//!   maquette --example > documento.json

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--example") {
        print!("{}", example_document_json());
        return;
    }

    let input = if args.len() > 1 && !args[1].starts_with('-') {
        match fs::read_to_string(&args[1]) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("✗ Failed to read {}: {}", args[1], e);
                std::process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("✗ Failed to read stdin: {}", e);
            std::process::exit(1);
        }
        buf
    };

    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "documento.pdf".to_string());

    match maquette::export_pdf_json(&input) {
        Ok(pdf_bytes) => {
            if let Err(e) = fs::write(&output_path, &pdf_bytes) {
                eprintln!("✗ Failed to write {}: {}", output_path, e);
                std::process::exit(1);
            }
            eprintln!("✓ Written {} bytes to {}", pdf_bytes.len(), output_path);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn example_document_json() -> &'static str {
    r##"[
  {
    "id": "title-1722860000001",
    "type": "text",
    "content": "Contrato de Prestação de Serviços",
    "x": 60,
    "y": 40,
    "zIndex": 1,
    "width": 500,
    "height": 40,
    "backgroundColor": "transparent",
    "textColor": "#181c23",
    "fontSize": 24,
    "fontWeight": "bold",
    "fontStyle": "normal",
    "textDecoration": "none",
    "textAlign": "left",
    "verticalAlign": "top"
  },
  {
    "id": "divider-1722860000002",
    "type": "divider",
    "x": 60,
    "y": 90,
    "zIndex": 2,
    "width": 500,
    "height": 4,
    "backgroundColor": "transparent",
    "textColor": "#000",
    "thickness": 2,
    "lineStyle": "solid",
    "lineColor": "#2d3646"
  },
  {
    "id": "paragraph-1722860000003",
    "type": "text",
    "content": "Pelo presente instrumento particular, as partes abaixo qualificadas têm entre si justo e contratado o que segue, mediante as cláusulas e condições adiante estipuladas.",
    "x": 60,
    "y": 110,
    "zIndex": 3,
    "width": 500,
    "height": 90,
    "backgroundColor": "transparent",
    "textColor": "#000",
    "fontSize": 14,
    "fontWeight": "normal",
    "fontStyle": "normal",
    "textDecoration": "none",
    "textAlign": "justify",
    "verticalAlign": "top"
  },
  {
    "id": "signature-1722860000004",
    "type": "signature",
    "x": 60,
    "y": 480,
    "zIndex": 4,
    "width": 250,
    "height": 40,
    "backgroundColor": "transparent",
    "textColor": "#000",
    "lineWidth": 200,
    "lineColor": "#000",
    "signatureText": "Nome:",
    "fontSize": 12,
    "fontWeight": "normal",
    "textAlign": "center"
  }
]"##
}
