//! Error types for galaxy construction, generation and snapshots.

use glam::DVec2;

/// Broad classification of a [`GalaxyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric or count value fell outside a hard-coded interval.
    Range,
    /// A value is not a member of a closed set, or a structural constraint
    /// (separation, wormhole uniqueness) was violated.
    Data,
    /// A required collection is below its minimum population.
    MissingData,
    /// An id space or placement region ran out of room.
    Capacity,
    /// Encoding, decoding or persisting a snapshot failed.
    Snapshot,
}

/// Errors returned while building or generating galaxy objects.
#[derive(Debug, thiserror::Error)]
pub enum GalaxyError {
    // --- range ---
    /// A world coordinate exceeds the galaxy boundary.
    #[error("coordinate ({x}, {y}) is outside the galaxy limit of ±{limit}")]
    CoordinateOutOfBounds {
        /// Offending x.
        x: f64,
        /// Offending y.
        y: f64,
        /// Absolute limit on either axis.
        limit: f64,
    },

    /// A star name is too short or too long.
    #[error("star name {name:?} has {len} characters, expected {min}..={max}")]
    NameLength {
        /// The rejected name.
        name: String,
        /// Its length in characters.
        len: usize,
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },

    /// A nebula was given too few or too many lobes.
    #[error("nebula has {count} lobes, expected {min}..={max}")]
    LobeCount {
        /// Number of lobes supplied.
        count: usize,
        /// Minimum lobe count.
        min: usize,
        /// Maximum lobe count.
        max: usize,
    },

    /// A lobe offset lies outside the nebula's local square.
    #[error("lobe offset ({x}, {y}) exceeds ±{bound}")]
    LobeOffset {
        /// Offending x offset.
        x: f64,
        /// Offending y offset.
        y: f64,
        /// Half-width of the allowed square.
        bound: f64,
    },

    /// A lobe rotation is outside `[0, 360)`.
    #[error("lobe rotation {0} is outside [0, 360)")]
    LobeRotation(f64),

    /// A lobe scale is outside the allowed interval.
    #[error("lobe scale {scale} is outside [{min}, {max}]")]
    LobeScale {
        /// Offending scale.
        scale: f64,
        /// Smallest allowed scale.
        min: f64,
        /// Largest allowed scale.
        max: f64,
    },

    /// A lobe requested a secondary color slot other than 0 or 1.
    #[error("secondary color index {0} is not 0 or 1")]
    SecondaryColorIndex(i64),

    /// A lobe requested an image variant other than 1 or 2.
    #[error("lobe image variant {0} is not 1 or 2")]
    ImageVariant(i64),

    /// A presentation scale factor is zero, negative or not finite.
    #[error("scale factor {0} must be finite and positive")]
    ScaleFactor(f64),

    /// A placement region is inverted, empty or not finite, or the
    /// requested dispersion is negative.
    #[error("invalid placement region ({min_x}, {min_y})..({max_x}, {max_y}) with dispersion {dispersion}")]
    InvalidRegion {
        /// Left edge.
        min_x: f64,
        /// Bottom edge.
        min_y: f64,
        /// Right edge.
        max_x: f64,
        /// Top edge.
        max_y: f64,
        /// Requested minimum separation.
        dispersion: f64,
    },

    /// A wormhole refers to a named star that does not exist.
    #[error("wormhole {worm_hole} refers to star {index}, but only {star_count} named stars exist")]
    WormHoleIndex {
        /// Position of the wormhole in the input list.
        worm_hole: usize,
        /// The dangling star index.
        index: usize,
        /// Number of named stars.
        star_count: usize,
    },

    // --- data ---
    /// A color name is not in the relevant table.
    #[error("unknown {table} color: {name:?}")]
    UnknownColor {
        /// Which table was consulted (`"star"`, `"nebula primary"`).
        table: &'static str,
        /// The rejected name.
        name: String,
    },

    /// Two stars or black holes are closer than the minimum separation.
    #[error("objects at {a} and {b} are {distance} apart, minimum is {min}")]
    TooClose {
        /// First position.
        a: DVec2,
        /// Second position.
        b: DVec2,
        /// Actual distance.
        distance: f64,
        /// Required minimum.
        min: f64,
    },

    /// Two nebula centers are closer than twice the maximum lobe reach.
    #[error("nebulae at {a} and {b} are {distance} apart, minimum is {min}")]
    NebulaeTooClose {
        /// First center.
        a: DVec2,
        /// Second center.
        b: DVec2,
        /// Actual distance.
        distance: f64,
        /// Required minimum.
        min: f64,
    },

    /// A named star is an endpoint of more than one wormhole.
    #[error("star {star} is linked by wormholes {first} and {second}")]
    DuplicateWormHoleStar {
        /// The star index used twice.
        star: usize,
        /// First wormhole using it.
        first: usize,
        /// Second wormhole using it.
        second: usize,
    },

    /// A wormhole connects a star to itself.
    #[error("wormhole {worm_hole} links star {star} to itself")]
    SelfLinkedWormHole {
        /// Position of the wormhole in the input list.
        worm_hole: usize,
        /// The star index.
        star: usize,
    },

    // --- missing data ---
    /// A collection is smaller than its minimum population.
    #[error("{what}: got {count}, need at least {min}")]
    MissingData {
        /// Name of the collection.
        what: &'static str,
        /// Supplied count.
        count: usize,
        /// Required minimum.
        min: usize,
    },

    // --- capacity ---
    /// The 24-bit pick color space has no free colors left.
    #[error("pick color space exhausted after {allocated} objects")]
    PickColorsExhausted {
        /// Number of colors handed out before failing.
        allocated: u32,
    },

    /// The region cannot hold the requested number of dispersed points.
    #[error("could not place {amount} points {dispersion} apart in region (placed {placed})")]
    DispersionCapacity {
        /// Requested point count.
        amount: usize,
        /// Requested separation.
        dispersion: f64,
        /// Points placed before giving up.
        placed: usize,
    },

    // --- snapshot ---
    /// Postcard encoding or decoding failed.
    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] postcard::Error),

    /// The snapshot was written by an incompatible format version.
    #[error("unsupported snapshot version {found}, expected {expected}")]
    SnapshotVersion {
        /// Version found in the byte stream.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },

    /// Reading or writing a snapshot file failed.
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
}

impl GalaxyError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CoordinateOutOfBounds { .. }
            | Self::NameLength { .. }
            | Self::LobeCount { .. }
            | Self::LobeOffset { .. }
            | Self::LobeRotation(_)
            | Self::LobeScale { .. }
            | Self::SecondaryColorIndex(_)
            | Self::ImageVariant(_)
            | Self::ScaleFactor(_)
            | Self::InvalidRegion { .. }
            | Self::WormHoleIndex { .. } => ErrorKind::Range,
            Self::UnknownColor { .. }
            | Self::TooClose { .. }
            | Self::NebulaeTooClose { .. }
            | Self::DuplicateWormHoleStar { .. }
            | Self::SelfLinkedWormHole { .. } => ErrorKind::Data,
            Self::MissingData { .. } => ErrorKind::MissingData,
            Self::PickColorsExhausted { .. } | Self::DispersionCapacity { .. } => {
                ErrorKind::Capacity
            }
            Self::Snapshot(_) | Self::SnapshotVersion { .. } | Self::Io(_) => ErrorKind::Snapshot,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GalaxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_grouped() {
        assert_eq!(GalaxyError::LobeRotation(400.0).kind(), ErrorKind::Range);
        assert_eq!(
            GalaxyError::UnknownColor {
                table: "star",
                name: "chartreuse".into()
            }
            .kind(),
            ErrorKind::Data
        );
        assert_eq!(
            GalaxyError::MissingData {
                what: "named stars",
                count: 1,
                min: 3
            }
            .kind(),
            ErrorKind::MissingData
        );
        assert_eq!(
            GalaxyError::PickColorsExhausted { allocated: 4 }.kind(),
            ErrorKind::Capacity
        );
    }

    #[test]
    fn test_message_names_offending_values() {
        let err = GalaxyError::NameLength {
            name: "a".into(),
            len: 1,
            min: 2,
            max: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"a\""), "{msg}");
        assert!(msg.contains("2..=20"), "{msg}");
    }
}
