use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Sector – fixed set of store sections
// ---------------------------------------------------------------------------

/// A store section, as labelled in the `Setor` column of the export.
/// The set is fixed; unknown labels are kept out of the enum (see
/// [`Reading::sector`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sector {
    Acougue,
    Frios,
    Peixaria,
    Hortifruti,
    Padaria,
    FrenteDeLoja,
    DocasSecas,
    DocaFria,
}

impl Sector {
    /// All sectors, in the order their tabs are shown.
    pub const ALL: [Sector; 8] = [
        Sector::Acougue,
        Sector::Frios,
        Sector::Peixaria,
        Sector::Hortifruti,
        Sector::Padaria,
        Sector::FrenteDeLoja,
        Sector::DocasSecas,
        Sector::DocaFria,
    ];

    /// The label used in the CSV export (and in the UI tabs).
    pub fn label(self) -> &'static str {
        match self {
            Sector::Acougue => "Açougue",
            Sector::Frios => "Frios",
            Sector::Peixaria => "Peixaria",
            Sector::Hortifruti => "Hortifrúti",
            Sector::Padaria => "Padaria",
            Sector::FrenteDeLoja => "Frente de Loja",
            Sector::DocasSecas => "Docas Secas",
            Sector::DocaFria => "Doca Fria",
        }
    }

    /// Parse a `Setor` cell. Surrounding whitespace is ignored.
    pub fn from_label(s: &str) -> Option<Sector> {
        let s = s.trim();
        Sector::ALL.into_iter().find(|sec| sec.label() == s)
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Status – the derived classification of one reading
// ---------------------------------------------------------------------------

/// Per-row calibration status, derived from weight and max capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    /// Weight matches the reference exactly.
    Ok,
    /// Deviation from reference within [1, 5] g inclusive.
    Tolerance,
    /// Deviation from reference above 5 g.
    Calibration,
    /// Capacity class not recognized; excluded from all counted buckets.
    Unclassified,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Tolerance => "Tolerance",
            Status::Calibration => "Calibration",
            Status::Unclassified => "—",
        }
    }

    /// Whether the reading belongs in the needs-review view.
    pub fn needs_review(self) -> bool {
        matches!(self, Status::Tolerance | Status::Calibration)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Reading – one row of the export
// ---------------------------------------------------------------------------

/// A single scale reading (one row of the source table).
#[derive(Debug, Clone)]
pub struct Reading {
    /// Scale identifier. Blank ids normalise to `"0"`.
    pub scale_id: String,
    /// Store section, `None` when the `Setor` label is not a known sector.
    pub sector: Option<Sector>,
    /// Measured weight in grams.
    pub weight: f64,
    /// Nominal max capacity of the scale in grams (expected 15000 or 35000).
    pub max_capacity: f64,
    /// Derived status, `Unclassified` until annotated.
    pub status: Status,
}

// ---------------------------------------------------------------------------
// ReadingSet – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with a pre-computed sector index.
#[derive(Debug, Clone)]
pub struct ReadingSet {
    /// All readings (rows), in file order.
    pub readings: Vec<Reading>,
    /// Sectors that actually occur in the data.
    pub sectors_present: BTreeSet<Sector>,
}

impl ReadingSet {
    /// Build the sector index from the loaded rows.
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        let sectors_present = readings.iter().filter_map(|r| r.sector).collect();
        ReadingSet {
            readings,
            sectors_present,
        }
    }

    /// Indices of the rows in the given sector, in original row order.
    pub fn sector_rows(&self, sector: Sector) -> Vec<usize> {
        self.readings
            .iter()
            .enumerate()
            .filter(|(_, r)| r.sector == Some(sector))
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of readings.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(sector: Option<Sector>) -> Reading {
        Reading {
            scale_id: "1".to_string(),
            sector,
            weight: 20000.0,
            max_capacity: 35000.0,
            status: Status::Unclassified,
        }
    }

    #[test]
    fn sector_labels_round_trip() {
        for sector in Sector::ALL {
            assert_eq!(Sector::from_label(sector.label()), Some(sector));
        }
    }

    #[test]
    fn sector_parse_trims_whitespace() {
        assert_eq!(Sector::from_label("  Padaria "), Some(Sector::Padaria));
        assert_eq!(Sector::from_label("Estoque"), None);
    }

    #[test]
    fn sector_index_tracks_present_sectors_only() {
        let set = ReadingSet::from_readings(vec![
            reading(Some(Sector::Frios)),
            reading(None),
            reading(Some(Sector::Padaria)),
            reading(Some(Sector::Frios)),
        ]);

        assert_eq!(set.len(), 4);
        assert!(set.sectors_present.contains(&Sector::Frios));
        assert!(set.sectors_present.contains(&Sector::Padaria));
        assert_eq!(set.sectors_present.len(), 2);
        assert_eq!(set.sector_rows(Sector::Frios), vec![0, 3]);
        assert_eq!(set.sector_rows(Sector::Peixaria), Vec::<usize>::new());
    }
}
