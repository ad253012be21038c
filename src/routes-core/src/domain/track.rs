use crate::{Mmsi, PositionReport};
use geo::LineString;
use std::collections::HashMap;

/// Position reports of one vessel, ascending by timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    mmsi: Mmsi,
    positions: Vec<PositionReport>,
}

impl Track {
    fn new(mmsi: Mmsi, mut positions: Vec<PositionReport>) -> Track {
        // Stable, reports sharing a timestamp keep their file order.
        positions.sort_by_key(|p| p.timestamp);
        Track { mmsi, positions }
    }

    pub fn mmsi(&self) -> &Mmsi {
        &self.mmsi
    }

    pub fn positions(&self) -> &[PositionReport] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn line_string(&self) -> LineString<f64> {
        self.positions.iter().map(PositionReport::coord).collect()
    }
}

/// Groups reports by vessel in the order each vessel is first encountered.
pub fn group_tracks(reports: impl IntoIterator<Item = PositionReport>) -> Vec<Track> {
    let mut index: HashMap<Mmsi, usize> = HashMap::new();
    let mut groups: Vec<(Mmsi, Vec<PositionReport>)> = Vec::new();

    for report in reports {
        match index.get(&report.mmsi) {
            Some(i) => groups[*i].1.push(report),
            None => {
                index.insert(report.mmsi.clone(), groups.len());
                groups.push((report.mmsi.clone(), vec![report]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(mmsi, positions)| Track::new(mmsi, positions))
        .collect()
}
