use std::io::Write;

use recicla_extract::ExtractError;
use recicla_extract::error::{PDF_ERROR_MARKER, TEXT_ERROR_MARKER};
use recicla_extract::upload::{Upload, UploadKind, extract_path, extract_upload};

#[test]
fn kinds_follow_extension_case_insensitively() {
    assert_eq!(UploadKind::from_name("relatorio.PDF"), Some(UploadKind::Pdf));
    assert_eq!(UploadKind::from_name("notas.txt"), Some(UploadKind::Text));
    assert_eq!(UploadKind::from_name("coleta.csv"), Some(UploadKind::Tabular));
    assert_eq!(UploadKind::from_name("foto.JPEG"), Some(UploadKind::Image));
    assert_eq!(UploadKind::from_name("planilha.xlsx"), None);
    assert_eq!(UploadKind::from_name("sem_extensao"), None);
}

#[test]
fn text_upload_is_extracted() {
    let upload = Upload::new("notas.txt", "3 latas e 2 garrafas");
    assert_eq!(extract_upload(&upload).unwrap(), "3 latas e 2 garrafas");
}

#[test]
fn csv_upload_is_rendered() {
    let upload = Upload::new("coleta.csv", "item,qtd\nlata,2\n");
    let table = extract_upload(&upload).unwrap();
    assert!(table.contains("lata"));
    assert!(table.starts_with("   item"));
}

#[test]
fn unsupported_upload_is_an_error() {
    let upload = Upload::new("planilha.xlsx", vec![1u8, 2, 3]);
    let err = extract_upload(&upload).unwrap_err();
    assert!(matches!(err, ExtractError::UnsupportedFileType(ref name) if name == "planilha.xlsx"));
}

#[test]
fn corrupt_pdf_upload_reports_marker() {
    let upload = Upload::new("doc.pdf", b"%PDF-garbage".to_vec());
    let err = extract_upload(&upload).unwrap_err();
    assert!(err.to_string().starts_with(PDF_ERROR_MARKER));
}

#[test]
fn path_reader_extracts_text_file() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    file.write_all("conteúdo".as_bytes()).unwrap();

    assert_eq!(extract_path(file.path()).unwrap(), "conteúdo");
}

#[test]
fn missing_path_reports_kind_marker() {
    let dir = tempfile::tempdir().unwrap();
    let err = extract_path(dir.path().join("nao_existe.txt")).unwrap_err();
    assert!(err.to_string().starts_with(TEXT_ERROR_MARKER));
}
