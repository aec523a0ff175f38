/// Numeric helpers.
///
/// Integral checks with floating-point tolerance, lossless float-to-integer
/// conversion, and the checked 64-bit factorial.
pub mod num;
/// Display helpers for callers that show results to a user.
///
/// Formatting is not part of evaluation; these helpers exist for the
/// command-line front end and for keypad front ends that need the percent and
/// sign-toggle keys.
pub mod format;
