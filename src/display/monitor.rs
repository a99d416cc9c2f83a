//! Active monitor enumeration
//!
//! Parses the text printed by `xrandr --listactivemonitors`:
//!
//! ```text
//! Monitors: 2
//!  0: +*eDP-1 1920/344x1080/194+0+0  eDP-1
//!  1: +HDMI-1 2560/597x1440/336+1920+0  HDMI-1
//! ```
//!
//! The output name is the last column. A `*` in the second column marks the
//! primary monitor.

/// An active monitor reported by xrandr
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Position in the xrandr listing
    pub index: usize,
    /// Output name passed to `--output`
    pub name: String,
    /// Whether xrandr marks this monitor as primary
    pub primary: bool,
}

/// Parse `xrandr --listactivemonitors` output
///
/// The `Monitors: N` header, blank lines and lines without a numeric index
/// are skipped.
pub fn parse_active_monitors(output: &str) -> Vec<Monitor> {
    output.lines().filter_map(parse_monitor_line).collect()
}

fn parse_monitor_line(line: &str) -> Option<Monitor> {
    let (index, rest) = line.trim().split_once(':')?;
    let index = index.trim().parse::<usize>().ok()?;

    let columns: Vec<&str> = rest.split_whitespace().collect();
    let name = (*columns.last()?).to_string();
    let primary = columns.len() > 1 && columns[0].contains('*');

    Some(Monitor {
        index,
        name,
        primary,
    })
}
