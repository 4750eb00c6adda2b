use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::runtime::Error;

/// Demultiplexing barcode of each modality, keyed by modality name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModalityBarcodes(BTreeMap<String, String>);

impl ModalityBarcodes {
    /// Pair modalities and barcodes one-to-one. Keys come out sorted, as PyYAML's `sort_keys` writes them
    pub fn from_lists(modalities: &[String], barcodes: &[String]) -> Result<Self, Error> {
        if modalities.len() != barcodes.len() {
            return Err(Error::modality_barcode_mismatch(modalities, barcodes));
        }

        let mut map = BTreeMap::new();
        for (modality, barcode) in modalities.iter().zip(barcodes) {
            if !is_nucleotide_sequence(barcode) {
                return Err(Error::invalid_barcode(modality, barcode));
            }
            if map.insert(modality.clone(), barcode.clone()).is_some() {
                return Err(Error::duplicate_modality(modality));
            }
        }
        Ok(ModalityBarcodes(map))
    }

    pub fn get(&self, modality: &str) -> Option<&str> {
        self.0.get(modality).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

fn is_nucleotide_sequence(s: &str) -> bool {
    !s.is_empty()
        && s
            .bytes()
            .all(|b| matches!(b.to_ascii_uppercase(), b'A' | b'C' | b'G' | b'T' | b'N'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pairs_in_order() {
        let m = ModalityBarcodes::from_lists(
            &strings(&["ATAC", "H3K27ac", "H3K27me3"]),
            &strings(&["ATAGAGGC", "TATAGCCT", "CCTATCCT"]),
        )
        .unwrap();
        assert_eq!(m.iter().count(), 3);
        assert_eq!(m.get("ATAC"), Some("ATAGAGGC"));
        assert_eq!(m.get("H3K27ac"), Some("TATAGCCT"));
        assert_eq!(m.get("H3K27me3"), Some("CCTATCCT"));
    }

    #[test]
    fn length_mismatch() {
        let e = ModalityBarcodes::from_lists(
            &strings(&["ATAC", "H3K27ac"]),
            &strings(&["ATAGAGGC"]),
        )
        .unwrap_err();
        assert!(matches!(e, Error::ModalityBarcodeMismatch { .. }));
        assert!(e.to_string().contains("H3K27ac"));
    }

    #[test]
    fn duplicate_modality() {
        let e = ModalityBarcodes::from_lists(
            &strings(&["ATAC", "ATAC"]),
            &strings(&["ATAGAGGC", "TATAGCCT"]),
        )
        .unwrap_err();
        assert!(matches!(e, Error::DuplicateModality { .. }));
    }

    #[test]
    fn barcode_must_be_dna() {
        let e = ModalityBarcodes::from_lists(&strings(&["ATAC"]), &strings(&["ATXG"])).unwrap_err();
        assert!(matches!(e, Error::InvalidBarcode { .. }));
        assert!(ModalityBarcodes::from_lists(&strings(&["ATAC"]), &strings(&["acgtn"])).is_ok());
    }
}
