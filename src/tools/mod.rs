//! Patches applied to a freshly copied template, one module per tool.

pub mod eslint;
pub mod git;
pub mod playwright;
pub mod prettier;
pub mod tailwind;
pub mod vitest;
