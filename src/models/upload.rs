use super::error::AppError;
use serde::{Deserialize, Serialize};

pub const GENERATION_FIELD: &str = "generation_file";
pub const PRICE_FIELD: &str = "price_file";

/// Message shown when the form is submitted without any file
pub const NO_FILE_SELECTED: &str = "no file selected";

/// A CSV file read into memory, ready for multipart submission
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The two optional file fields of the upload form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadForm {
    pub generation: Option<UploadFile>,
    pub price: Option<UploadFile>,
}

impl UploadForm {
    pub fn new(generation: Option<UploadFile>, price: Option<UploadFile>) -> Self {
        Self { generation, price }
    }

    /// Non-empty files paired with their multipart field names
    pub fn files(&self) -> impl Iterator<Item = (&'static str, &UploadFile)> {
        [
            (GENERATION_FIELD, self.generation.as_ref()),
            (PRICE_FIELD, self.price.as_ref()),
        ]
        .into_iter()
        .filter_map(|(field, file)| file.filter(|f| !f.is_empty()).map(|f| (field, f)))
    }

    /// True when neither field holds a non-empty file
    pub fn is_empty(&self) -> bool {
        self.files().next().is_none()
    }

    /// Rejects a form with nothing to send
    pub fn validate(&self) -> Result<(), AppError> {
        if self.is_empty() {
            return Err(AppError::Validation(NO_FILE_SELECTED.to_string()));
        }
        Ok(())
    }
}

/// One file the server accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(rename = "type")]
    pub kind: String,
    pub filename: String,
    pub rows: u64,
}

/// Successful upload response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadOutcome {
    pub message: String,
    #[serde(default)]
    pub uploaded: Vec<UploadedFile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_files_are_not_sent() {
        let form = UploadForm::new(
            Some(UploadFile::new("gen.csv", vec![])),
            Some(UploadFile::new("price.csv", b"a,b\n".to_vec())),
        );

        let fields: Vec<_> = form.files().map(|(field, f)| (field, f.name.as_str())).collect();
        assert_eq!(fields, vec![(PRICE_FIELD, "price.csv")]);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_form_with_only_empty_files_is_rejected() {
        let form = UploadForm::new(Some(UploadFile::new("gen.csv", vec![])), None);
        assert_eq!(
            form.validate(),
            Err(AppError::Validation(NO_FILE_SELECTED.to_string()))
        );
    }

    #[test]
    fn test_outcome_deserialization() {
        let json = r#"{
            "status": "success",
            "message": "2 files processed",
            "uploaded": [{"type": "generation", "filename": "gen.csv", "rows": 48}]
        }"#;

        let outcome: UploadOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.message, "2 files processed");
        assert_eq!(outcome.uploaded[0].rows, 48);
    }
}
