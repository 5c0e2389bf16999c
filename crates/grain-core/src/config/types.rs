//! Closed selector enums. Each serializes by its variant name and parses back
//! from the same name, which is also the tag used by the JavaScript binding.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

macro_rules! tagged_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ConfigError::UnknownVariant { kind: $kind, value: s.to_owned() })
            }
        }
    };
}

tagged_enum! {
    /// Base scalar noise algorithm.
    NoiseType, "noise type", default = OpenSimplex2 {
        OpenSimplex2,
        /// Smoother, wider-kernel variant of OpenSimplex2.
        OpenSimplex2S,
        Cellular,
        Perlin,
        ValueCubic,
        Value,
    }
}

tagged_enum! {
    /// Domain rotation applied to 3D coordinates before evaluation.
    RotationType3D, "rotation type", default = None {
        None,
        /// Good for 3D noise sampled as 2D slices at constant Z.
        ImproveXYPlanes,
        /// Good for 3D noise sampled as 2D slices at constant Y.
        ImproveXZPlanes,
    }
}

tagged_enum! {
    /// Octave combination rule for scalar noise.
    FractalType, "fractal type", default = None {
        None,
        FBm,
        Ridged,
        PingPong,
    }
}

tagged_enum! {
    /// Octave combination rule for domain warp.
    DomainWarpFractalType, "domain warp fractal type", default = None {
        None,
        /// Each octave samples the coordinate already warped by the previous ones.
        DomainWarpProgressive,
        /// Every octave samples the original coordinate.
        DomainWarpIndependent,
    }
}

tagged_enum! {
    CellularDistanceFunction, "cellular distance function", default = EuclideanSq {
        Euclidean,
        EuclideanSq,
        Manhattan,
        Hybrid,
    }
}

tagged_enum! {
    /// What cellular noise reports for a sample point.
    CellularReturnType, "cellular return type", default = Distance {
        /// Value hashed from the nearest feature point's cell.
        CellValue,
        Distance,
        Distance2,
        Distance2Add,
        Distance2Sub,
        Distance2Mul,
        Distance2Div,
    }
}

tagged_enum! {
    /// Displacement algorithm for domain warp.
    DomainWarpType, "domain warp type", default = OpenSimplex2 {
        OpenSimplex2,
        OpenSimplex2Reduced,
        BasicGrid,
    }
}
