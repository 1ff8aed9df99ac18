//! Verifier diagnostics.

use core::math::Float;

/// Which verifier check produced a diagnostic record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CheckKind {
    Reciprocity,
    EnergyFixed,
    EnergyConvergence,
}

impl CheckKind {
    /// Returns a short label for log output.
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Reciprocity => "reciprocity",
            CheckKind::EnergyFixed => "energy conservation",
            CheckKind::EnergyConvergence => "energy conservation (convergence)",
        }
    }
}

/// One Monte Carlo sample drawn by an energy-conservation check.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleRecord {
    /// The check that drew the sample.
    pub check: CheckKind,

    /// 1-based index of the incoming direction under test.
    pub test: usize,

    /// 1-based index of the outgoing sample within the test.
    pub sample: usize,

    /// Cosine between the outgoing direction and the reference normal.
    pub cos_theta: Float,

    /// The sample's estimator contribution: f·cosθ / pdf.
    pub value: Float,
}

/// The estimator computed for one incoming direction.
#[derive(Clone, Debug, PartialEq)]
pub struct EstimateRecord {
    /// The check that computed the estimator.
    pub check: CheckKind,

    /// 1-based index of the incoming direction under test.
    pub test: usize,

    /// Number of samples averaged.
    pub samples: usize,

    /// The Monte Carlo estimator value.
    pub estimator: Float,
}

/// The final verdict of one check over one model.
#[derive(Clone, Debug, PartialEq)]
pub struct VerdictRecord {
    /// The check that concluded.
    pub check: CheckKind,

    /// The model's name.
    pub name: String,

    /// Whether the check passed.
    pub passed: bool,

    /// Total samples drawn by the check.
    pub samples: usize,

    /// The final estimator, when the check computes one.
    pub estimator: Option<Float>,
}

/// A structured sink for verifier diagnostics.
///
/// The verifier writes per-sample, per-estimate and per-verdict records to an
/// injected sink instead of a process-wide logger; callers choose where the
/// records go.
pub trait DiagnosticSink {
    /// Records one Monte Carlo sample.
    ///
    /// * `record` - The sample record.
    fn sample(&mut self, record: &SampleRecord);

    /// Records one per-incoming-direction estimate.
    ///
    /// * `record` - The estimate record.
    fn estimate(&mut self, record: &EstimateRecord);

    /// Records a check's verdict.
    ///
    /// * `record` - The verdict record.
    fn verdict(&mut self, record: &VerdictRecord);
}

/// A sink that drops every record.
#[derive(Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn sample(&mut self, _record: &SampleRecord) {}

    fn estimate(&mut self, _record: &EstimateRecord) {}

    fn verdict(&mut self, _record: &VerdictRecord) {}
}

/// A sink that forwards records to the `log` crate: samples at debug level,
/// estimates and verdicts at info/warn.
#[derive(Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn sample(&mut self, record: &SampleRecord) {
        debug!(
            "[{}] test [{}] sample [{}] cos_theta = {}, value = {}",
            record.check.label(),
            record.test,
            record.sample,
            record.cos_theta,
            record.value
        );
    }

    fn estimate(&mut self, record: &EstimateRecord) {
        debug!(
            "[{}] test [{}] Monte Carlo estimator <I> = {} over {} samples",
            record.check.label(),
            record.test,
            record.estimator,
            record.samples
        );
    }

    fn verdict(&mut self, record: &VerdictRecord) {
        if record.passed {
            info!(
                "[{}] passes the {} check after {} samples",
                record.name,
                record.check.label(),
                record.samples
            );
        } else {
            warn!(
                "[{}] fails the {} check after {} samples",
                record.name,
                record.check.label(),
                record.samples
            );
        }
    }
}

/// A sink that retains every record, used by tests to observe verifier
/// behavior.
#[derive(Default)]
pub struct MemorySink {
    /// Retained sample records.
    pub samples: Vec<SampleRecord>,

    /// Retained estimate records.
    pub estimates: Vec<EstimateRecord>,

    /// Retained verdict records.
    pub verdicts: Vec<VerdictRecord>,
}

impl DiagnosticSink for MemorySink {
    fn sample(&mut self, record: &SampleRecord) {
        self.samples.push(record.clone());
    }

    fn estimate(&mut self, record: &EstimateRecord) {
        self.estimates.push(record.clone());
    }

    fn verdict(&mut self, record: &VerdictRecord) {
        self.verdicts.push(record.clone());
    }
}
