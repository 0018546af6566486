// Resume analysis: ATS compatibility scoring and skill suggestions.
// Both are pure, deterministic heuristics — no provider calls.

pub mod ats;
pub mod handlers;
pub mod skills;
