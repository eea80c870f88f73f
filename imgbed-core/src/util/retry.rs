use std::fmt;

pub const DEFAULT_ATTEMPTS: usize = 3;

/// Runs `op` up to `attempts` times until it succeeds.
///
/// Errors for which `abort` returns `true` are returned immediately
/// without using up the remaining attempts.
pub fn retry<T, E, F, A>(attempts: usize, mut op: F, abort: A) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    A: Fn(&E) -> bool,
    E: fmt::Display,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(res) => return Ok(res),
            Err(err) if abort(&err) => {
                log::debug!("Giving up after attempt {attempt}: {err}");
                return Err(err);
            }
            Err(err) if attempt >= attempts => return Err(err),
            Err(err) => {
                log::debug!("Attempt {attempt} of {attempts} failed: {err}");
                attempt += 1;
            }
        }
    }
}
