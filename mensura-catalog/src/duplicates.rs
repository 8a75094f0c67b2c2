//! Duplicate conversion analysis
//!
//! Diagnostic pass grouping units of a quantity that share an identical
//! conversion. Conversion itself never consults this.

use std::collections::HashMap;

use mensura_core::{Conversion, Unit};

use crate::UnitCatalog;

/// Units of one quantity sharing an identical conversion
#[derive(Debug)]
pub struct DuplicateGroup<'a> {
    /// The shared conversion
    pub conversion: Conversion,
    /// Members, in source order
    pub units: Vec<&'a Unit>,
}

// f64 has no Eq/Hash; value-identical conversions group by bit pattern.
fn conversion_key(conversion: &Conversion) -> (u64, u64) {
    (
        conversion.multiplier.to_bits(),
        conversion.offset.to_bits(),
    )
}

impl UnitCatalog {
    /// Group units by quantity, then by identical conversion, keeping only
    /// groups with more than one member
    ///
    /// Quantities without any such group are absent from the result rather
    /// than mapped to an empty list.
    pub fn duplicate_conversions(&self) -> HashMap<&str, Vec<DuplicateGroup<'_>>> {
        let mut grouped: HashMap<&str, Vec<DuplicateGroup>> = HashMap::new();
        let mut positions: HashMap<(&str, (u64, u64)), usize> = HashMap::new();

        for unit in self.units() {
            let quantity = unit.quantity.as_str();
            let groups = grouped.entry(quantity).or_default();
            match positions.get(&(quantity, conversion_key(&unit.conversion))) {
                Some(&at) => groups[at].units.push(unit),
                None => {
                    positions.insert((quantity, conversion_key(&unit.conversion)), groups.len());
                    groups.push(DuplicateGroup {
                        conversion: unit.conversion,
                        units: vec![unit],
                    });
                }
            }
        }

        grouped
            .into_iter()
            .filter_map(|(quantity, groups)| {
                let duplicates: Vec<DuplicateGroup> = groups
                    .into_iter()
                    .filter(|group| group.units.len() > 1)
                    .collect();
                if duplicates.is_empty() {
                    None
                } else {
                    Some((quantity, duplicates))
                }
            })
            .collect()
    }
}
