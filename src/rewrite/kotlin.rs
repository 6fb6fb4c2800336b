//! Kotlin declaration rewriting for a misspelled package segment.
//!
//! Two rules are applied to the whole file text, one per declaration kind:
//!
//! ```text
//! package com.zeroscam.core_domain.util       ->  package com.zeroscam.coredomain.util
//! import com.zeroscam.core_domain.model.X     ->  import com.zeroscam.coredomain.model.X
//! import com.zeroscam.core_domain.model.*     ->  import com.zeroscam.coredomain.model.*
//! package com.zeroscam.core_domainish         ->  (untouched)
//! ```
//!
//! The old token only matches as a whole segment: the continuation is a run
//! of `.segment` groups and the match must end on a word boundary.

use crate::error::{FixError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Declaration keyword a rule is anchored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    Package,
    Import,
}

impl Declaration {
    pub const ALL: [Declaration; 2] = [Declaration::Package, Declaration::Import];

    pub fn keyword(self) -> &'static str {
        match self {
            Declaration::Package => "package",
            Declaration::Import => "import",
        }
    }
}

/// Compiled substitution rules for one segment rename.
#[derive(Debug)]
pub struct PackageRules {
    old: String,
    new: String,
    replacements: Vec<(Regex, String)>,
}

impl PackageRules {
    /// Compiles one rule per [`Declaration`] for `namespace.old` -> `namespace.new`.
    pub fn new(namespace: &str, old: &str, new: &str) -> Result<Self> {
        let mut replacements = Vec::with_capacity(Declaration::ALL.len());

        for decl in Declaration::ALL {
            let pattern = format!(
                r"({keyword} {ns}\.){old}((?:\.[A-Za-z0-9_]+)*)\b",
                keyword = decl.keyword(),
                ns = regex::escape(namespace),
                old = regex::escape(old),
            );
            log::debug!("{} rule: {}", decl.keyword(), pattern);

            replacements.push((Regex::new(&pattern)?, format!("${{1}}{new}${{2}}")));
        }

        Ok(Self {
            old: old.to_string(),
            new: new.to_string(),
            replacements,
        })
    }

    /// The substring whose presence marks a file as needing a fix.
    pub fn marker(&self) -> &str {
        &self.old
    }

    pub fn replacement(&self) -> &str {
        &self.new
    }

    /// Applies every rule to `content`.
    ///
    /// Returns `Some(modified)` if the text changed, `None` otherwise.
    pub fn apply(&self, content: &str) -> Option<String> {
        let mut result = content.to_string();

        for (pattern, replacement) in &self.replacements {
            if pattern.is_match(&result) {
                result = pattern.replace_all(&result, replacement.as_str()).into_owned();
            }
        }

        if result != content { Some(result) } else { None }
    }
}

/// Rewrites one file in place.
///
/// Files without the marker are never written. A file that has the marker
/// but no matching declaration is not written either, so "fixed" always
/// means the bytes on disk changed; such a file is left for the
/// verification pass to report. Returns whether the content on disk
/// changed.
pub fn fix_file(path: &Path, rules: &PackageRules) -> Result<bool> {
    let content = fs::read_to_string(path).map_err(|source| FixError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if !content.contains(rules.marker()) {
        return Ok(false);
    }

    let Some(new_content) = rules.apply(&content) else {
        log::debug!(
            "Marker present but no declaration matched, leaving: {}",
            path.display()
        );
        return Ok(false);
    };

    fs::write(path, new_content).map_err(|source| FixError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Updated Kotlin file: {}", path.display());

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rules() -> PackageRules {
        PackageRules::new("com.zeroscam", "core_domain", "coredomain").unwrap()
    }

    #[test]
    fn test_rewrites_package_declaration() {
        let out = rules()
            .apply("package com.zeroscam.core_domain.util\n")
            .unwrap();
        assert_eq!(out, "package com.zeroscam.coredomain.util\n");
    }

    #[test]
    fn test_rewrites_every_import() {
        let src = "import com.zeroscam.core_domain.model.X\n\
                   import com.zeroscam.core_domain.value.PhoneNumber\n\
                   import com.zeroscam.core_domain.enums.*\n";
        let out = rules().apply(src).unwrap();
        assert_eq!(
            out,
            "import com.zeroscam.coredomain.model.X\n\
             import com.zeroscam.coredomain.value.PhoneNumber\n\
             import com.zeroscam.coredomain.enums.*\n"
        );
    }

    #[test]
    fn test_bare_segment_without_continuation() {
        let out = rules().apply("package com.zeroscam.core_domain\n").unwrap();
        assert_eq!(out, "package com.zeroscam.coredomain\n");
    }

    #[test]
    fn test_longer_identifier_is_untouched() {
        let src = "package com.zeroscam.core_domainish\nimport com.zeroscam.core_domain_v2.X\n";
        assert_eq!(rules().apply(src), None);
    }

    #[test]
    fn test_other_namespace_is_untouched() {
        let src = "import org.example.core_domain.X\nval s = \"core_domain\"\n";
        assert_eq!(rules().apply(src), None);
    }

    #[test]
    fn test_usage_outside_declarations_is_left_alone() {
        let src = "package com.zeroscam.core_domain.model\n\
                   val fq = com.zeroscam.core_domain.model.X()\n";
        let out = rules().apply(src).unwrap();
        assert_eq!(
            out,
            "package com.zeroscam.coredomain.model\n\
             val fq = com.zeroscam.core_domain.model.X()\n"
        );
    }

    #[test]
    fn test_namespace_dots_are_literal() {
        let src = "import comxzeroscam.core_domain.X\n";
        assert_eq!(rules().apply(src), None);
    }

    #[test]
    fn test_fix_file_writes_changes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("A.kt");
        fs::write(
            &path,
            "package com.zeroscam.core_domain.util\n\nimport com.zeroscam.core_domain.model.X\n",
        )
        .unwrap();

        assert!(fix_file(&path, &rules()).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "package com.zeroscam.coredomain.util\n\nimport com.zeroscam.coredomain.model.X\n"
        );

        // Second pass has nothing left to do
        assert!(!fix_file(&path, &rules()).unwrap());
    }

    #[test]
    fn test_fix_file_without_marker_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("B.kt");
        fs::write(&path, "package com.zeroscam.other\n").unwrap();

        assert!(!fix_file(&path, &rules()).unwrap());
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "package com.zeroscam.other\n"
        );
    }

    #[test]
    fn test_fix_file_marker_without_declaration() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("C.kt");
        let src = "// see core_domain module\nclass C\n";
        fs::write(&path, src).unwrap();

        assert!(!fix_file(&path, &rules()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), src);
    }

    #[test]
    fn test_fix_file_missing_fails() {
        let temp = TempDir::new().unwrap();
        let result = fix_file(&temp.path().join("gone.kt"), &rules());

        assert!(matches!(result, Err(FixError::Read { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_fix_file_read_only_fails_on_write() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Locked.kt");
        let src = "package com.zeroscam.core_domain.util\n";
        fs::write(&path, src).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();

        // Permission bits do not bind a privileged user
        if fs::OpenOptions::new().write(true).open(&path).is_ok() {
            return;
        }

        let result = fix_file(&path, &rules());

        assert!(matches!(result, Err(FixError::Write { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), src);
    }

    #[test]
    fn test_fix_file_invalid_utf8_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.kt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x63]).unwrap();

        let result = fix_file(&path, &rules());

        assert!(matches!(result, Err(FixError::Read { .. })));
    }
}
