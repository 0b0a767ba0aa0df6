//! Static catalog of supported languages and their remote runtimes
//!
//! Every language the UI surfaces maps to a pinned runtime version on the
//! remote service and a conventional source file name. The table is fixed at
//! compile time; identifiers outside it deliberately fall back to the python
//! configuration (and a generic file name) instead of failing, so callers can
//! forward arbitrary identifiers without a validation step.

use serde::Serialize;

/// Remote runtime selection for one language: service-side runtime name,
/// pinned version, and the file name the source is submitted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageRuntimeConfig {
    pub language: &'static str,
    pub version: &'static str,
    pub file_name: &'static str,
}

const RUNTIMES: &[(&str, LanguageRuntimeConfig)] = &[
    ("python", LanguageRuntimeConfig { language: "python", version: "3.10.0", file_name: "main.py" }),
    ("javascript", LanguageRuntimeConfig { language: "javascript", version: "18.15.0", file_name: "main.js" }),
    ("typescript", LanguageRuntimeConfig { language: "typescript", version: "5.0.3", file_name: "main.ts" }),
    ("java", LanguageRuntimeConfig { language: "java", version: "15.0.2", file_name: "Main.java" }),
    ("cpp", LanguageRuntimeConfig { language: "cpp", version: "10.2.0", file_name: "main.cpp" }),
    ("c", LanguageRuntimeConfig { language: "c", version: "10.2.0", file_name: "main.c" }),
    ("csharp", LanguageRuntimeConfig { language: "csharp", version: "6.12.0", file_name: "main.cs" }),
    ("go", LanguageRuntimeConfig { language: "go", version: "1.16.2", file_name: "main.go" }),
    ("rust", LanguageRuntimeConfig { language: "rust", version: "1.68.2", file_name: "main.rs" }),
    ("php", LanguageRuntimeConfig { language: "php", version: "8.2.3", file_name: "main.php" }),
    ("ruby", LanguageRuntimeConfig { language: "ruby", version: "3.0.1", file_name: "main.rb" }),
    ("kotlin", LanguageRuntimeConfig { language: "kotlin", version: "1.8.20", file_name: "main.kt" }),
    ("swift", LanguageRuntimeConfig { language: "swift", version: "5.3.3", file_name: "main.swift" }),
    ("perl", LanguageRuntimeConfig { language: "perl", version: "5.36.0", file_name: "main.pl" }),
    ("lua", LanguageRuntimeConfig { language: "lua", version: "5.4.4", file_name: "main.lua" }),
    ("r", LanguageRuntimeConfig { language: "r", version: "4.1.1", file_name: "main.r" }),
];

const DEFAULT_FILE_NAME: &str = "main.txt";

/// Resolve the runtime configuration for a language identifier.
///
/// Unknown identifiers resolve to the python entry. This is a permissive
/// policy, not an error path.
pub fn runtime_config(language: &str) -> LanguageRuntimeConfig {
    RUNTIMES
        .iter()
        .find(|(id, _)| *id == language)
        .map(|(_, config)| *config)
        .unwrap_or_else(|| runtime_config("python"))
}

/// File name the source is submitted under. Unknown identifiers get the
/// generic `main.txt`, independent of the runtime fallback.
pub fn source_file_name(language: &str) -> &'static str {
    RUNTIMES
        .iter()
        .find(|(id, _)| *id == language)
        .map(|(_, config)| config.file_name)
        .unwrap_or(DEFAULT_FILE_NAME)
}

/// True when the identifier has its own catalog entry (no fallback involved).
pub fn is_supported(language: &str) -> bool {
    RUNTIMES.iter().any(|(id, _)| *id == language)
}

/// Display metadata for the language listing surface.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

const CATALOG: &[LanguageInfo] = &[
    LanguageInfo { id: "python", name: "Python", description: "High-level programming language" },
    LanguageInfo { id: "javascript", name: "JavaScript", description: "Dynamic web programming" },
    LanguageInfo { id: "typescript", name: "TypeScript", description: "Typed JavaScript" },
    LanguageInfo { id: "java", name: "Java", description: "Object-oriented programming" },
    LanguageInfo { id: "cpp", name: "C++", description: "Systems programming language" },
    LanguageInfo { id: "c", name: "C", description: "Low-level programming" },
    LanguageInfo { id: "csharp", name: "C#", description: "Microsoft .NET framework" },
    LanguageInfo { id: "go", name: "Go", description: "Fast, compiled language" },
    LanguageInfo { id: "rust", name: "Rust", description: "Systems programming" },
    LanguageInfo { id: "php", name: "PHP", description: "Server-side scripting" },
    LanguageInfo { id: "ruby", name: "Ruby", description: "Dynamic programming language" },
    LanguageInfo { id: "kotlin", name: "Kotlin", description: "Modern JVM language" },
];

/// Languages presented on the home listing. A subset of the runtime table:
/// every listed language has a runtime entry, but not every runtime is listed.
pub fn language_catalog() -> &'static [LanguageInfo] {
    CATALOG
}

/// Infer a language identifier from a file extension, for CLI usage where the
/// user names a file instead of a language.
pub fn infer_language(extension: &str) -> Option<&'static str> {
    let id = match extension {
        "py" => "python",
        "js" | "mjs" => "javascript",
        "ts" => "typescript",
        "java" => "java",
        "cpp" | "cc" | "cxx" => "cpp",
        "c" => "c",
        "cs" => "csharp",
        "go" => "go",
        "rs" => "rust",
        "php" => "php",
        "rb" => "ruby",
        "kt" => "kotlin",
        "swift" => "swift",
        "pl" => "perl",
        "lua" => "lua",
        "r" => "r",
        _ => return None,
    };
    Some(id)
}
