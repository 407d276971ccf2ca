//! Domain models for the roster reshape pipeline.
//!
//! This module contains the core data structures used throughout the pipeline:
//!
//! - [`Role`] - the seven source role slots of a roster row
//! - [`Assignment`] - one output row: a (branch, role, person) combination
//! - [`OUTPUT_COLUMNS`] - the stable output column order
//! - [`required_columns`] - the seventeen column labels a roster must carry

use serde::{Deserialize, Serialize};

/// Shared columns copied from every roster row into each assignment.
pub const COL_BRANCH: &str = "Branch";
pub const COL_BRANCH_ID: &str = "Branch ID";
pub const COL_STATE: &str = "State";

/// Prefix prepended to every normalized employee id to form `Role_Emp_ID`.
pub const EMP_ID_PREFIX: &str = "SM";

/// Output column labels, in the order downstream consumers rely on.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "Branch",
    "Branch ID",
    "State",
    "Name",
    "Emp ID",
    "Role",
    "Role_Emp_ID",
    "Unique code",
];

// =============================================================================
// Role
// =============================================================================

/// A source role slot in the wide roster format.
///
/// Each role binds to a (name column, employee-id column) pair in the input.
/// `Zh` ("Senior ZH" in the input) exists only on the input side: it collapses
/// into [`Role::Zm`] before rows reach the output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Am,
    Dm,
    Rm,
    Sh,
    Zm,
    Zh,
    Cm,
}

impl Role {
    /// All source roles, in melt order. The output row order is role-major
    /// over this list, so changing it changes the output ordering contract.
    pub const ALL: [Role; 7] = [
        Role::Am,
        Role::Dm,
        Role::Rm,
        Role::Sh,
        Role::Zm,
        Role::Zh,
        Role::Cm,
    ];

    /// The (name column, employee-id column) pair this role reads from.
    pub fn source_columns(self) -> (&'static str, &'static str) {
        match self {
            Role::Am => ("AM", "AM Emp ID"),
            Role::Dm => ("DM", "DM Emp ID"),
            Role::Rm => ("RM", "RM Emp ID"),
            Role::Sh => ("SH", "SH Emp ID"),
            Role::Zm => ("ZM", "ZM Emp ID"),
            Role::Zh => ("Senior ZH", "Senior ZH Emp ID"),
            Role::Cm => ("SCH Name", "SCH EMP ID"),
        }
    }

    /// Canonical role code string.
    pub fn as_code(self) -> &'static str {
        match self {
            Role::Am => "AM",
            Role::Dm => "DM",
            Role::Rm => "RM",
            Role::Sh => "SH",
            Role::Zm => "ZM",
            Role::Zh => "ZH",
            Role::Cm => "CM",
        }
    }

    /// Parse a role from its code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "AM" => Some(Role::Am),
            "DM" => Some(Role::Dm),
            "RM" => Some(Role::Rm),
            "SH" => Some(Role::Sh),
            "ZM" => Some(Role::Zm),
            "ZH" => Some(Role::Zh),
            "CM" => Some(Role::Cm),
            _ => None,
        }
    }

    /// The output bucket this role lands in: `ZH` merges into `ZM`,
    /// every other role maps to itself.
    pub fn collapse(self) -> Role {
        match self {
            Role::Zh => Role::Zm,
            role => role,
        }
    }
}

/// Every column label a roster sheet must carry: the three shared columns
/// followed by each role's (name, id) pair in melt order.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec![COL_BRANCH, COL_BRANCH_ID, COL_STATE];
    for role in Role::ALL {
        let (name_col, id_col) = role.source_columns();
        columns.push(name_col);
        columns.push(id_col);
    }
    columns
}

// =============================================================================
// Assignment
// =============================================================================

/// One long-format output row: a person holding a role at a branch.
///
/// Field order matches [`OUTPUT_COLUMNS`]; serde renames produce the exact
/// output header labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assignment {
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "Branch ID")]
    pub branch_id: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// Normalized employee id: all digits, zero-padded to a minimum width of 4.
    #[serde(rename = "Emp ID")]
    pub emp_id: String,
    /// Output role code; never [`Role::Zh`].
    #[serde(rename = "Role")]
    pub role: Role,
    /// `"SM"` + `emp_id`.
    #[serde(rename = "Role_Emp_ID")]
    pub role_emp_id: String,
    /// `role_emp_id` + stringified branch id; the natural key of a
    /// (person, branch) assignment.
    #[serde(rename = "Unique code")]
    pub unique_code: String,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_code_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.as_code()), Some(role));
        }
        assert_eq!(Role::from_code("zm"), Some(Role::Zm));
        assert_eq!(Role::from_code("INVALID"), None);
    }

    #[test]
    fn test_collapse() {
        assert_eq!(Role::Zh.collapse(), Role::Zm);
        for role in [Role::Am, Role::Dm, Role::Rm, Role::Sh, Role::Zm, Role::Cm] {
            assert_eq!(role.collapse(), role);
        }
    }

    #[test]
    fn test_required_columns_complete() {
        let columns = required_columns();
        assert_eq!(columns.len(), 17);
        for label in [
            "Branch",
            "Branch ID",
            "State",
            "AM",
            "AM Emp ID",
            "DM",
            "DM Emp ID",
            "RM",
            "RM Emp ID",
            "SH",
            "SH Emp ID",
            "ZM",
            "ZM Emp ID",
            "Senior ZH",
            "Senior ZH Emp ID",
            "SCH Name",
            "SCH EMP ID",
        ] {
            assert!(columns.contains(&label), "missing {label}");
        }
    }

    #[test]
    fn test_role_serializes_as_code() {
        let json = serde_json::to_string(&Role::Zh).unwrap();
        assert_eq!(json, "\"ZH\"");
        let json = serde_json::to_string(&Role::Cm).unwrap();
        assert_eq!(json, "\"CM\"");
    }

    #[test]
    fn test_assignment_serializes_with_output_headers() {
        let assignment = Assignment {
            branch: "X1".into(),
            branch_id: "10".into(),
            state: "NY".into(),
            name: "Alice".into(),
            emp_id: "0005".into(),
            role: Role::Am,
            role_emp_id: "SM0005".into(),
            unique_code: "SM000510".into(),
        };
        let value = serde_json::to_value(&assignment).unwrap();
        for column in OUTPUT_COLUMNS {
            assert!(value.get(column).is_some(), "missing column {column}");
        }
        assert_eq!(value["Unique code"], "SM000510");
    }
}
