use std::fmt::Write;

use crate::Flag;

macro_rules! w {
    ($($tt:tt)*) => {
        { let _ = write!($($tt)*); }
    };
}

/// Renders the help text for `flags`, in declaration order.
///
/// ```text
/// h3-to-geo: Converts indexes to latitude/longitude center coordinates in degrees
///
///     -h, --help             Show this help message.
///     -i, --index <index>    Index, or not specified to read indexes from standard in.
/// ```
pub fn usage(program: &str, description: &str, flags: &[&mut Flag<'_>]) -> String {
    let mut buf = String::new();
    w!(buf, "{program}: {description}\n");

    if flags.is_empty() {
        return buf;
    }
    w!(buf, "\n");

    let lefts = flags.iter().map(|flag| left_column(flag)).collect::<Vec<_>>();
    let width = lefts.iter().map(|it| it.chars().count()).max().unwrap_or(0);

    for (flag, left) in flags.iter().zip(&lefts) {
        let required = if flag.is_required() { "Required. " } else { "" };
        w!(buf, "    {left:<width$}  {required}{}", flag.help_text());
        // No trailing padding when there is nothing to align.
        let line_len = buf.trim_end_matches(' ').len();
        buf.truncate(line_len);
        w!(buf, "\n");
    }
    buf
}

fn left_column(flag: &Flag<'_>) -> String {
    let mut buf = flag.names().join(", ");
    if let Some(value_name) = flag.value_name() {
        w!(buf, " <{value_name}>");
    }
    buf
}
