//! Listing of the names registered on a bus.

use core::cmp::Ordering;
use std::io::Write;

use crate::{
    style::{Role, Style},
    Introspectable,
};

/// Whether `name` is a connection-unique name, like `:1.42`.
pub fn is_unique(name: &str) -> bool {
    name.starts_with(':')
}

/// Order two bus names: well-known names first, unique names last, each group lexically.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (is_unique(a), is_unique(b)) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        _ => a.cmp(b),
    }
}

/// Sort bus names in listing order, see [`compare`].
pub fn collate<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}

/// Write the collated bus names to `out`.
///
/// Unless `terse` is set, every name is followed by the PID of its owner and the command line
/// that `cmdline` gives for that PID. Failing to get a PID aborts the listing.
pub async fn list<P, W, F>(
    provider: &mut P,
    out: &mut W,
    style: &dyn Style,
    terse: bool,
    cmdline: F,
) -> crate::Result<()>
where
    P: Introspectable,
    W: Write,
    F: Fn(u32) -> String,
{
    let mut names = provider.list_names().await?;
    collate(&mut names);
    debug!("{} names on the bus", names.len());

    for name in &names {
        if terse {
            writeln!(out, "{name}")?;
            continue;
        }

        let pid = provider.connection_pid(name).await?;
        writeln!(
            out,
            "{} {} {}",
            style.paint(name, Role::BusName),
            style.paint(&pid.to_string(), Role::Pid),
            style.paint(&cmdline(pid), Role::Cmdline),
        )?;
    }

    Ok(())
}

/// The command line of process `pid`, read from procfs.
///
/// Arguments are separated by spaces. Returns an empty string if the process information is not
/// available.
pub fn proc_cmdline(pid: u32) -> String {
    match std::fs::read(format!("/proc/{pid}/cmdline")) {
        Ok(raw) => join_cmdline(&raw),
        Err(e) => {
            debug!("Failed to read command line of {pid}: {e}");
            String::new()
        }
    }
}

fn join_cmdline(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .trim_end_matches('\0')
        .replace('\0', " ")
}
