//! Record validation and cleanup.
//!
//! Each validator is a stable filter: accepted records keep their upstream
//! order and have their text fields cleaned (embedded `\r\n` removed, then
//! trimmed). Rejections are only counted.

use crate::observability::metrics;
use crate::records::types::{Barang, Negara, Pelabuhan};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Strip embedded CR+LF sequences and surrounding whitespace.
pub fn clean_text(value: &str) -> String {
    value.replace("\r\n", "").trim().to_string()
}

fn report(resource: &'static str, kept: usize, total: usize) {
    tracing::debug!(resource, kept, total, "Validated records");
    metrics::record_validation(resource, kept, total);
}

/// Keep countries with a positive id and non-blank name and code.
pub fn validate_negaras(negaras: Vec<Negara>) -> Vec<Negara> {
    let total = negaras.len();
    let valid: Vec<Negara> = negaras
        .into_iter()
        .filter(|n| n.id_negara > 0 && !is_blank(&n.nama_negara) && !is_blank(&n.kode_negara))
        .map(|mut n| {
            n.nama_negara = clean_text(&n.nama_negara);
            n.kode_negara = clean_text(&n.kode_negara);
            n
        })
        .collect();

    report("negaras", valid.len(), total);
    valid
}

/// Keep ports with non-blank id and name that belong to `id_negara`.
///
/// Ownership is an exact string comparison: `"03"` does not match `"3"`.
pub fn validate_pelabuhans(pelabuhans: Vec<Pelabuhan>, id_negara: &str) -> Vec<Pelabuhan> {
    let total = pelabuhans.len();
    let valid: Vec<Pelabuhan> = pelabuhans
        .into_iter()
        .filter(|p| {
            !is_blank(&p.id_pelabuhan) && !is_blank(&p.nama_pelabuhan) && p.id_negara == id_negara
        })
        .map(|mut p| {
            p.nama_pelabuhan = clean_text(&p.nama_pelabuhan);
            p
        })
        .collect();

    tracing::debug!(id_negara, "Port ownership filter applied");
    report("pelabuhans", valid.len(), total);
    valid
}

/// Keep goods with a positive id, a non-blank name and a positive price.
pub fn validate_barangs(barangs: Vec<Barang>) -> Vec<Barang> {
    let total = barangs.len();
    let valid: Vec<Barang> = barangs
        .into_iter()
        .filter(|b| b.id_barang > 0 && !is_blank(&b.nama_barang) && b.harga > 0.0)
        .map(|mut b| {
            b.nama_barang = clean_text(&b.nama_barang);
            b.description = clean_text(&b.description);
            b
        })
        .collect();

    report("barangs", valid.len(), total);
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::normalize::normalize;

    fn negara(id: i64, kode: &str, nama: &str) -> Negara {
        Negara {
            id_negara: id,
            kode_negara: kode.into(),
            nama_negara: nama.into(),
        }
    }

    fn pelabuhan(id: &str, nama: &str, id_negara: &str) -> Pelabuhan {
        Pelabuhan {
            id_pelabuhan: id.into(),
            nama_pelabuhan: nama.into(),
            id_negara: id_negara.into(),
        }
    }

    fn barang(id: i64, nama: &str, harga: f64) -> Barang {
        Barang {
            id_barang: id,
            nama_barang: nama.into(),
            id_pelabuhan: 1,
            description: String::new(),
            diskon: 0.0,
            harga,
        }
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text(" ID \r\n"), "ID");
        assert_eq!(clean_text("Jawa\r\nTimur"), "JawaTimur");
        // A lone line feed is not a CR+LF sequence, only trimmed at the edges.
        assert_eq!(clean_text("a\nb\n"), "a\nb");
    }

    #[test]
    fn test_negaras_rejects_invalid() {
        let input = vec![
            negara(0, "ID", "Indonesia"),
            negara(-4, "ID", "Indonesia"),
            negara(1, "  ", "Indonesia"),
            negara(2, "MY", "\r\n"),
            negara(3, "SG", "Singapore"),
        ];
        let valid = validate_negaras(input);
        assert_eq!(valid, vec![negara(3, "SG", "Singapore")]);
    }

    #[test]
    fn test_negara_cleanup_scenario() {
        let body = br#"{"status":"success","data":[{"id_negara":1,"kode_negara":" ID \r\n","nama_negara":"Indonesia\r\n"}]}"#;
        let candidates = normalize::<Negara>(body).unwrap().into_records();
        let valid = validate_negaras(candidates);
        assert_eq!(valid, vec![negara(1, "ID", "Indonesia")]);
    }

    #[test]
    fn test_pelabuhans_exact_country_match() {
        let input = vec![
            pelabuhan("P1", "Tanjung Priok", "3"),
            pelabuhan("P2", "Tanjung Perak", "03"),
            pelabuhan("P3", "Belawan", " 3"),
            pelabuhan("P4", "Makassar\r\n", "3"),
        ];
        let valid = validate_pelabuhans(input, "3");
        let ids: Vec<_> = valid.iter().map(|p| p.id_pelabuhan.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P4"]);
        assert_eq!(valid[1].nama_pelabuhan, "Makassar");
    }

    #[test]
    fn test_pelabuhans_rejects_blank_id_and_name() {
        let input = vec![pelabuhan(" ", "Bitung", "1"), pelabuhan("P9", "", "1")];
        assert!(validate_pelabuhans(input, "1").is_empty());
    }

    #[test]
    fn test_pelabuhan_id_is_not_trimmed() {
        let valid = validate_pelabuhans(vec![pelabuhan(" P1 ", "Bitung", "1")], "1");
        assert_eq!(valid[0].id_pelabuhan, " P1 ");
    }

    #[test]
    fn test_barangs_requires_positive_price() {
        let input = vec![
            barang(1, "Kopi", 0.0),
            barang(2, "Teh", -5.0),
            barang(3, "Cengkeh", 12.5),
            barang(0, "Pala", 3.0),
            barang(4, " ", 3.0),
        ];
        let valid = validate_barangs(input);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].id_barang, 3);
    }

    #[test]
    fn test_barangs_cleans_name_and_description() {
        let mut item = barang(7, "  Karet\r\n", 1.0);
        item.description = "Getah\r\n alami ".into();
        let valid = validate_barangs(vec![item]);
        assert_eq!(valid[0].nama_barang, "Karet");
        assert_eq!(valid[0].description, "Getah alami");
    }

    #[test]
    fn test_validation_preserves_order() {
        let input = vec![
            negara(5, "E", "Five"),
            negara(0, "X", "Dropped"),
            negara(2, "B", "Two"),
            negara(9, "I", "Nine"),
        ];
        let ids: Vec<_> = validate_negaras(input).iter().map(|n| n.id_negara).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_normalize_and_validate_twice_is_identical() {
        let body = br#"[{"id_barang":1,"nama_barang":" Lada\r\n","id_pelabuhan":4,"description":"","diskon":0,"harga":2.5}]"#;
        let run = || validate_barangs(normalize::<Barang>(body).unwrap().into_records());
        assert_eq!(run(), run());
    }
}
