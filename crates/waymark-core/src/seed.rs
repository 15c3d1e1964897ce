//! Built-in seed data for a first-time user.
//!
//! A cold start against an empty store would otherwise render an empty map.
//! The seed set is the canonical Kigali point list; there is no path seed.

use crate::models::Point;

/// Points substituted when the persisted point collection is empty.
pub fn default_points() -> Vec<Point> {
    vec![
        Point::new("1744902906077", "Kimironko", -1.942618, 30.1382016),
        Point::new("1744902930259", "DownTown", -1.9428851, 30.0574266),
        Point::new("1746801040000", "Nyacyonga", -1.8765, 30.0788),
        Point::new("1746801060000", "Kabuga", -1.965, 30.215),
        Point::new("1746801080000", "Busanza", -2.0357, 30.1184),
        Point::new("1746801100000", "Remera", -1.95, 30.1),
        Point::new("1746801120000", "Kanombe", -1.9692, 30.1675),
        Point::new("1746801140000", "Bishenyi", -1.6833, 29.6167),
        Point::new("1746801160000", "Rwandex", -1.963, 30.085),
        Point::new("1746801180000", "Nyabugogo", -1.9536, 30.0475),
        Point::new("1746801200000", "Nyamirambo", -1.96, 30.04),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let points = default_points();
        let ids: HashSet<&str> = points.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), points.len());
    }
}
