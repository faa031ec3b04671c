//! License and provenance comment placed at the top of every generated file.

use chrono::{Datelike, Local, NaiveDateTime};

/// First year of the copyright range.
pub const COPYRIGHT_FIRST_YEAR: i32 = 2019;

pub const COPYRIGHT_HOLDER: &str = "Nicholas Corgan";

pub const SPDX_LICENSE: &str = "BSD-3-Clause";

/// The comment header for one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    generated_at: NaiveDateTime,
}

impl Header {
    /// A header stamped with the current local time.
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }

    pub fn at(generated_at: NaiveDateTime) -> Self {
        Self { generated_at }
    }

    /// The header text. Ends with a newline.
    pub fn render(&self) -> String {
        format!(
            "// Copyright (c) {first}-{year} {holder}\n\
             // SPDX-License-Identifier: {license}\n\
             \n\
             //\n\
             // This file was auto-generated on {stamp}.\n\
             //\n",
            first = COPYRIGHT_FIRST_YEAR,
            year = self.generated_at.year(),
            holder = COPYRIGHT_HOLDER,
            license = SPDX_LICENSE,
            stamp = self.generated_at.format("%Y-%m-%d %H:%M:%S%.6f"),
        )
    }

    /// Prepend the header to a rendered body, separated by one blank line.
    pub fn wrap(&self, body: &str) -> String {
        format!("{}\n{}", self.render(), body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed() -> Header {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_micro_opt(9, 5, 2, 41)
            .unwrap();
        Header::at(ts)
    }

    #[test]
    fn test_render() {
        let expected = "\
// Copyright (c) 2019-2024 Nicholas Corgan
// SPDX-License-Identifier: BSD-3-Clause

//
// This file was auto-generated on 2024-03-07 09:05:02.000041.
//
";
        assert_eq!(fixed().render(), expected);
    }

    #[test]
    fn test_wrap_inserts_one_blank_line() {
        let wrapped = fixed().wrap("#include <arrayfire.h>\n");
        assert!(wrapped.starts_with("// Copyright (c) 2019-2024"));
        assert!(wrapped.ends_with(".000041.\n//\n\n#include <arrayfire.h>\n"));
    }

    #[test]
    fn test_now_uses_current_year() {
        let year = Local::now().year();
        assert!(Header::now().render().contains(&format!("2019-{year} ")));
    }
}
