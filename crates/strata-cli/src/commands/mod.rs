//! Command handlers.
//!
//! Each submodule implements exactly one subcommand: translate CLI arguments
//! into core types, call the core, display results. No analysis logic lives
//! here.

pub mod analyze;
pub mod classify;
pub mod completions;
pub mod config;
pub mod deps;
pub mod layers;
pub mod lint;
pub mod name;

use crate::cli::Layer;
use strata_core::domain::LayerId;

/// CLI layer value → core layer id.
pub(crate) fn to_core_layer(layer: Layer) -> LayerId {
    match layer {
        Layer::Atom => LayerId::Atom,
        Layer::Molecule => LayerId::Molecule,
        Layer::Organism => LayerId::Organism,
        Layer::Template => LayerId::Template,
        Layer::Feature => LayerId::Feature,
        Layer::Layout => LayerId::Layout,
        Layer::Particle => LayerId::Particle,
        Layer::Model => LayerId::Model,
        Layer::Entity => LayerId::Entity,
        Layer::Util => LayerId::Util,
        Layer::Gateway => LayerId::Gateway,
        Layer::Repository => LayerId::Repository,
    }
}
