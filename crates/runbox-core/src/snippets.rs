//! Default starter snippets, served on the per-language page and used by the
//! CLI when no source file is given. Unknown identifiers get the python
//! snippet, consistent with the runtime fallback.

const PYTHON: &str = r#"# Write Python 3 code and run it.

print("Hello, World!")

def greet(name):
    return f"Hello, {name}!"

print(greet("Python Developer"))
"#;

const JAVASCRIPT: &str = r#"// Write JavaScript code and run it.

console.log("Hello, World!");

function greet(name) {
    return `Hello, ${name}!`;
}

console.log(greet("JavaScript Developer"));
"#;

const TYPESCRIPT: &str = r#"// Write TypeScript code and run it.

function greet(name: string): string {
    return `Hello, ${name}!`;
}

console.log("Hello, World!");
console.log(greet("TypeScript Developer"));
"#;

const JAVA: &str = r#"// Write Java code and run it.

public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
        System.out.println(greet("Java Developer"));
    }

    public static String greet(String name) {
        return "Hello, " + name + "!";
    }
}
"#;

const CPP: &str = r#"// Write C++ code and run it.

#include <iostream>
#include <string>

std::string greet(const std::string& name) {
    return "Hello, " + name + "!";
}

int main() {
    std::cout << "Hello, World!" << std::endl;
    std::cout << greet("C++ Developer") << std::endl;
    return 0;
}
"#;

const C: &str = r#"// Write C code and run it.

#include <stdio.h>

int main(void) {
    printf("Hello, World!\n");
    printf("Hello, C Developer!\n");
    return 0;
}
"#;

const CSHARP: &str = r#"// Write C# code and run it.

using System;

class Program {
    static string Greet(string name) => $"Hello, {name}!";

    static void Main() {
        Console.WriteLine("Hello, World!");
        Console.WriteLine(Greet("C# Developer"));
    }
}
"#;

const GO: &str = r#"// Write Go code and run it.

package main

import "fmt"

func greet(name string) string {
	return "Hello, " + name + "!"
}

func main() {
	fmt.Println("Hello, World!")
	fmt.Println(greet("Go Developer"))
}
"#;

const RUST: &str = r#"// Write Rust code and run it.

fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

fn main() {
    println!("Hello, World!");
    println!("{}", greet("Rust Developer"));
}
"#;

const PHP: &str = r#"<?php
// Write PHP code and run it.

echo "Hello, World!\n";

function greet($name) {
    return "Hello, $name!";
}

echo greet("PHP Developer") . "\n";
"#;

const RUBY: &str = r#"# Write Ruby code and run it.

puts "Hello, World!"

def greet(name)
  "Hello, #{name}!"
end

puts greet("Ruby Developer")
"#;

const KOTLIN: &str = r#"// Write Kotlin code and run it.

fun greet(name: String) = "Hello, $name!"

fun main() {
    println("Hello, World!")
    println(greet("Kotlin Developer"))
}
"#;

const SWIFT: &str = r#"// Write Swift code and run it.

func greet(_ name: String) -> String {
    return "Hello, \(name)!"
}

print("Hello, World!")
print(greet("Swift Developer"))
"#;

const PERL: &str = r#"# Write Perl code and run it.

use strict;
use warnings;

print "Hello, World!\n";

sub greet { my ($name) = @_; return "Hello, $name!"; }

print greet("Perl Developer"), "\n";
"#;

const LUA: &str = r#"-- Write Lua code and run it.

print("Hello, World!")

local function greet(name)
    return "Hello, " .. name .. "!"
end

print(greet("Lua Developer"))
"#;

const R: &str = r#"# Write R code and run it.

print("Hello, World!")

greet <- function(name) {
  paste0("Hello, ", name, "!")
}

print(greet("R Developer"))
"#;

/// Starter source for a language, python for unknown identifiers.
pub fn default_snippet(language: &str) -> &'static str {
    match language {
        "javascript" => JAVASCRIPT,
        "typescript" => TYPESCRIPT,
        "java" => JAVA,
        "cpp" => CPP,
        "c" => C,
        "csharp" => CSHARP,
        "go" => GO,
        "rust" => RUST,
        "php" => PHP,
        "ruby" => RUBY,
        "kotlin" => KOTLIN,
        "swift" => SWIFT,
        "perl" => PERL,
        "lua" => LUA,
        "r" => R,
        _ => PYTHON,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::language_catalog;

    #[test]
    fn every_catalog_language_has_a_snippet() {
        for info in language_catalog() {
            assert!(!default_snippet(info.id).is_empty());
        }
    }

    #[test]
    fn unknown_language_gets_python_snippet() {
        assert_eq!(default_snippet("cobol"), default_snippet("python"));
    }
}
