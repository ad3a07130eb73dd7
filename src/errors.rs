use thiserror::Error;

/// Input and shape problems detected before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A measure was handed a hazard of a different type than it targets.
    #[error("measure `{measure}` targets hazard type `{expected}` but the hazard is `{found}`")]
    HazardTypeMismatch {
        measure: String,
        expected: String,
        found: String,
    },

    /// Neither a future entity nor an explicit future year was supplied.
    #[error("future year could not be resolved: supply a future entity or an explicit future year")]
    UnresolvedFutureYear,

    /// The analysis horizon runs backwards.
    #[error("future year {future} precedes present year {present}")]
    InvertedHorizon { present: i32, future: i32 },

    /// The discount-rate table does not span the requested horizon.
    #[error("discount rates cover {first}..={last} but the horizon is {start}..={end}")]
    DiscountCoverage {
        first: i32,
        last: i32,
        start: i32,
        end: i32,
    },

    /// Year/rate or year/value sequences disagree in length.
    #[error("value series has {values} entries for a {years}-year horizon")]
    SeriesLength { values: usize, years: usize },

    /// Discount-rate years must be contiguous and ascending.
    #[error("discount-rate years are not contiguous at {year}")]
    NonContiguousYears { year: i32 },

    /// Present and future scenarios track different measure sets.
    #[error("present and future scenarios track different measures: {0}")]
    ScenarioMeasureMismatch(String),

    /// A scenario mapping without its `no measure` baseline entry.
    #[error("scenario has no `no measure` baseline entry")]
    MissingBaseline,

    /// Two outcomes under one name in a scenario mapping; also hit by a
    /// measure carrying the reserved baseline name.
    #[error("duplicate outcome for measure `{0}` in scenario mapping")]
    DuplicateOutcome(String),

    /// Measure names are unique per hazard type.
    #[error("duplicate measure `{name}` for hazard type `{haz_type}`")]
    DuplicateMeasure { name: String, haz_type: String },

    /// An exposure point references a vulnerability curve that does not exist.
    #[error("exposure point {point} references impact function {impf_id} which is not defined for hazard type `{haz_type}`")]
    UnresolvedImpactFunc {
        point: usize,
        impf_id: u32,
        haz_type: String,
    },

    /// Entity-level consistency failure.
    #[error("entity check failed: {0}")]
    EntityCheck(String),
}

/// Failures inside the numeric pipeline itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    /// No vulnerability curve for an exposure category.
    #[error("no impact function with id {impf_id} for hazard type `{haz_type}`")]
    MissingImpactFunc { haz_type: String, impf_id: u32 },

    /// An exposure point sits on a centroid the hazard does not carry.
    #[error("exposure point {point} references centroid {centroid} but the hazard has {centroids} centroids")]
    CentroidOutOfRange {
        point: usize,
        centroid: usize,
        centroids: usize,
    },

    /// The intensity matrix does not match the declared event/centroid shape.
    #[error("hazard intensity has {len} entries, expected {events} events x {centroids} centroids")]
    IntensityShape {
        len: usize,
        events: usize,
        centroids: usize,
    },

    /// Per-event frequency and event ids disagree in length.
    #[error("hazard has {events} events but {frequencies} frequency entries")]
    FrequencyShape { events: usize, frequencies: usize },

    /// Catch-all for external impact-evaluator implementations.
    #[error("impact evaluation failed: {0}")]
    ImpactEval(String),
}

/// Main crate error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

pub type Result<T> = std::result::Result<T, Error>;
