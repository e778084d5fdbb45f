//! Date-generation rules for coupon schedules.

/// Rule used to generate the dates of a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateGeneration {
    /// Backward from termination date to effective date.
    Backward,
    /// Forward from effective date to termination date.
    Forward,
    /// No intermediate dates between effective date and termination date.
    Zero,
    /// All dates but effective date and termination date are taken to be on
    /// the third Wednesday of their month (with forward calculation).
    ThirdWednesday,
    /// All dates but the effective date are taken to be the twentieth of
    /// their month (used for CDS schedules in emerging markets).
    Twentieth,
    /// All dates but the effective date are taken to be the twentieth of an
    /// IMM month (used for CDS schedules).
    TwentiethIMM,
    /// Same as `TwentiethIMM` with unrestricted date ends and long/short
    /// stub coupon period (old CDS convention).
    OldCDS,
    /// Credit derivatives standard rule since 'Big Bang' changes in 2009.
    CDS,
}

impl std::fmt::Display for DateGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DateGeneration::Backward => "Backward",
            DateGeneration::Forward => "Forward",
            DateGeneration::Zero => "Zero",
            DateGeneration::ThirdWednesday => "ThirdWednesday",
            DateGeneration::Twentieth => "Twentieth",
            DateGeneration::TwentiethIMM => "TwentiethIMM",
            DateGeneration::OldCDS => "OldCDS",
            DateGeneration::CDS => "CDS",
        };
        f.write_str(s)
    }
}
