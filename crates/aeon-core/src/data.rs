//! Built-in epoch dataset.
//!
//! Twelve epochs of cosmic history. Declaration order here is the catalog's
//! navigation order, so keep the list chronological.

use crate::catalog::{EpochRecord, Era};

/// All built-in records, chronologically ordered.
pub fn builtin_records() -> Vec<EpochRecord> {
    vec![
        EpochRecord::new(
            "planck-epoch",
            "Planck Epoch",
            "0 to 10⁻⁴³ s",
            "Above 10³² K",
            Era::Primordial,
        )
        .describe(
            "The earliest meaningful moment. The observable universe is far \
             smaller than a proton, and the energy density is so extreme that \
             gravity is as strong as the other forces.\n\n\
             Key processes:\n\
             - All four fundamental forces act as a single unified force\n\
             - Spacetime itself undergoes quantum fluctuations\n\
             - No tested theory describes physics at this scale",
        )
        .stat("Age of universe", "< 10⁻⁴³ s")
        .stat("Temperature", "≈ 10³² K")
        .stat("Energy scale", "≈ 10¹⁹ GeV")
        .stat("Characteristic length", "1.6 × 10⁻³⁵ m"),
        EpochRecord::new(
            "grand-unification",
            "Grand Unification Epoch",
            "10⁻⁴³ to 10⁻³⁶ s",
            "≈ 10²⁹ K",
            Era::Primordial,
        )
        .describe(
            "Gravity has separated out, but the strong, weak, and \
             electromagnetic interactions remain a single unified force.\n\n\
             Key processes:\n\
             - Gravity decouples from the other interactions\n\
             - Grand unified symmetry holds, then breaks as the universe cools\n\
             - Candidate era for the origin of the matter–antimatter imbalance",
        )
        .stat("Age of universe", "10⁻⁴³ to 10⁻³⁶ s")
        .stat("Temperature", "≈ 10²⁹ K")
        .stat("Energy scale", "≈ 10¹⁶ GeV"),
        EpochRecord::new(
            "inflation",
            "Cosmic Inflation",
            "10⁻³⁶ to 10⁻³² s",
            "Supercooled, then reheated",
            Era::Primordial,
        )
        .describe(
            "A burst of exponential expansion stretches the universe by a \
             factor of at least 10²⁶ in a tiny fraction of a second, smoothing \
             and flattening it.\n\n\
             Key processes:\n\
             - Space expands faster than light can cross it\n\
             - Quantum fluctuations are stretched to cosmic scales\n\
             - Those fluctuations later seed all large-scale structure",
        )
        .stat("Expansion factor", "≥ 10²⁶")
        .stat("Duration", "≈ 10⁻³² s")
        .stat("Proposed driver", "Inflaton field"),
        EpochRecord::new(
            "quark-epoch",
            "Quark Epoch",
            "10⁻¹² to 10⁻⁶ s",
            "Above 10¹² K",
            Era::Particle,
        )
        .describe(
            "The four forces have taken their present forms, but it is still \
             far too hot for quarks to bind together. The universe is a dense \
             quark–gluon plasma.\n\n\
             Key processes:\n\
             - Electroweak symmetry breaking gives particles mass\n\
             - Quarks and gluons roam freely in a plasma\n\
             - Heavy-ion colliders recreate these conditions briefly",
        )
        .stat("Age of universe", "10⁻¹² to 10⁻⁶ s")
        .stat("Temperature", "> 10¹² K")
        .stat("State of matter", "Quark–gluon plasma"),
        EpochRecord::new(
            "hadron-epoch",
            "Hadron Epoch",
            "10⁻⁶ s to 1 s",
            "Above 10¹⁰ K",
            Era::Particle,
        )
        .describe(
            "Cooling lets the strong force confine quarks into protons, \
             neutrons, and other hadrons. Almost all matter annihilates with \
             antimatter; a part-per-billion excess survives.\n\n\
             Key processes:\n\
             - Quarks condense into protons and neutrons\n\
             - Matter–antimatter annihilation floods the universe with photons\n\
             - The surviving baryon excess becomes all ordinary matter",
        )
        .stat("Age of universe", "10⁻⁶ s to 1 s")
        .stat("Temperature", "> 10¹⁰ K")
        .stat("Surviving matter fraction", "≈ 1 in 10⁹"),
        EpochRecord::new(
            "lepton-epoch",
            "Lepton Epoch",
            "1 s to 10 s",
            "≈ 10¹⁰ K",
            Era::Particle,
        )
        .describe(
            "Hadrons and anti-hadrons have annihilated; leptons dominate the \
             mass of the universe. Around one second in, neutrinos stop \
             interacting and stream free.\n\n\
             Key processes:\n\
             - Neutrinos decouple, forming a relic background\n\
             - Electron–positron pairs annihilate as the universe cools\n\
             - The neutron-to-proton ratio freezes out",
        )
        .stat("Age of universe", "1 s to 10 s")
        .stat("Temperature", "≈ 10¹⁰ K")
        .stat("Neutrino decoupling", "≈ 1 s"),
        EpochRecord::new(
            "nucleosynthesis",
            "Big Bang Nucleosynthesis",
            "10 s to 20 min",
            "10⁹ K falling to 10⁷ K",
            Era::Particle,
        )
        .describe(
            "For a few minutes the whole universe is a fusion reactor. \
             Protons and neutrons fuse into the first atomic nuclei before \
             expansion cools things below fusion temperatures.\n\n\
             Key processes:\n\
             - Deuterium survives once photons can no longer break it apart\n\
             - Roughly a quarter of baryonic mass ends up as helium-4\n\
             - Trace deuterium and lithium remain as a sensitive fossil record",
        )
        .stat("Age of universe", "10 s to 20 min")
        .stat("Helium-4 yield", "≈ 25% by mass")
        .stat("Deuterium yield", "≈ 0.01% by mass")
        .stat("Heaviest products", "Lithium-7 (traces)"),
        EpochRecord::new(
            "recombination",
            "Recombination",
            "≈ 380,000 yr",
            "≈ 3000 K",
            Era::Matter,
        )
        .describe(
            "Electrons finally bind to nuclei, forming neutral atoms. Light \
             stops scattering off free electrons and streams away: the cosmic \
             microwave background we still observe today.\n\n\
             Key processes:\n\
             - Neutral hydrogen and helium form\n\
             - The universe becomes transparent to light\n\
             - The CMB is released at redshift z ≈ 1100",
        )
        .stat("Age of universe", "≈ 380,000 yr")
        .stat("Temperature", "≈ 3000 K")
        .stat("Redshift", "z ≈ 1100")
        .stat("Relic", "Cosmic microwave background"),
        EpochRecord::new(
            "dark-ages",
            "Dark Ages",
            "380,000 yr to ≈ 150 million yr",
            "60 K falling to 10 K",
            Era::Matter,
        )
        .describe(
            "After the CMB is released there is nothing left that shines. The \
             universe is dark, filled with neutral hydrogen slowly clumping \
             under gravity.\n\n\
             Key processes:\n\
             - Density ripples from inflation grow into the first halos\n\
             - Neutral hydrogen emits faintly at the 21 cm line\n\
             - Gravity sets the stage for the first stars",
        )
        .stat("Age of universe", "380,000 yr to 150 Myr")
        .stat("Luminous sources", "None")
        .stat("Observable tracer", "21 cm hydrogen line"),
        EpochRecord::new(
            "reionization",
            "Reionization",
            "150 million yr to 1 billion yr",
            "Gas reheated to ≈ 10⁴ K",
            Era::Stellar,
        )
        .describe(
            "The first stars ignite. Their ultraviolet light ionizes the \
             neutral hydrogen around them, and growing bubbles of ionized gas \
             eventually overlap to fill the universe.\n\n\
             Key processes:\n\
             - Massive first-generation (Population III) stars form and die fast\n\
             - Early galaxies and quasars carve out ionized bubbles\n\
             - Intergalactic hydrogen becomes ionized again, and stays so",
        )
        .stat("Age of universe", "150 Myr to 1 Gyr")
        .stat("First stars", "Population III")
        .stat("Driver", "Ultraviolet starlight and quasars"),
        EpochRecord::new(
            "galaxy-era",
            "Galaxy Era",
            "1 to 10 billion yr",
            "Background 19 K falling to 3 K",
            Era::Stellar,
        )
        .describe(
            "Galaxies merge, collide, and settle into the cosmic web. Star \
             formation peaks around redshift two, an era sometimes called \
             cosmic noon, then slowly declines.\n\n\
             Key processes:\n\
             - Galaxies assemble along dark-matter filaments\n\
             - Star formation peaks at cosmic noon (z ≈ 2)\n\
             - Heavy elements from stellar generations enrich the gas",
        )
        .stat("Age of universe", "1 to 10 Gyr")
        .stat("Peak star formation", "z ≈ 2")
        .stat("Structure", "Cosmic web of filaments and voids"),
        EpochRecord::new(
            "dark-energy-era",
            "Dark Energy Era",
            "≈ 10 billion yr onward",
            "Background 2.7 K",
            Era::Expansion,
        )
        .describe(
            "Matter has thinned out enough that a constant vacuum energy \
             takes over the expansion, which begins to accelerate. This is \
             the era we live in.\n\n\
             Key processes:\n\
             - Expansion switches from decelerating to accelerating (z ≈ 0.4)\n\
             - Dark energy comes to dominate the energy budget\n\
             - Structure growth on the largest scales slows down",
        )
        .stat("Age of universe", "10 Gyr onward")
        .stat("Background temperature", "2.725 K")
        .stat("Dark energy share", "≈ 68%")
        .stat("Matter share", "≈ 32% (of which ≈ 5% ordinary)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_count() {
        assert_eq!(builtin_records().len(), 12);
    }

    #[test]
    fn test_builtin_ids_unique() {
        let records = builtin_records();
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_builtin_chronological_endpoints() {
        let records = builtin_records();
        assert_eq!(records.first().map(|r| r.id.as_str()), Some("planck-epoch"));
        assert_eq!(records.last().map(|r| r.id.as_str()), Some("dark-energy-era"));
    }

    #[test]
    fn test_builtin_records_are_complete() {
        for record in builtin_records() {
            assert!(!record.title.is_empty(), "{} has no title", record.id);
            assert!(!record.time.is_empty(), "{} has no time label", record.id);
            assert!(!record.temperature.is_empty(), "{} has no temperature", record.id);
            assert!(!record.description.is_empty(), "{} has no description", record.id);
            assert!(!record.stats.is_empty(), "{} has no stats", record.id);
        }
    }
}
