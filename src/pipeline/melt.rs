//! Role-column melting: wide roster rows into long per-role rows.
//!
//! For each role in [`Role::ALL`] (outer loop) and each input row (inner
//! loop), slice the shared branch columns plus that role's name/id column
//! pair into a uniform [`MeltedRow`]. Row order is therefore role-major,
//! input-row-minor, which is the stable ordering contract of the output
//! table.

use serde_json::Value;

use crate::models::{Role, COL_BRANCH, COL_BRANCH_ID, COL_STATE};

/// One melted row: shared branch columns plus a single role slot.
///
/// `branch_id` and `emp_id` stay raw [`Value`]s: the id is normalized by the
/// filter stage and the branch id is stringified during key synthesis.
#[derive(Debug, Clone)]
pub struct MeltedRow {
    pub branch: String,
    pub branch_id: Value,
    pub state: String,
    pub name: String,
    pub emp_id: Value,
    pub role: Role,
}

/// Melt wide roster rows into one row per (input row, role) combination.
///
/// A role's cells being absent or blank is not an error: the row is produced
/// with null/empty slots and left for the filter to drop.
pub fn melt(rows: &[Value]) -> Vec<MeltedRow> {
    let mut melted = Vec::with_capacity(rows.len() * Role::ALL.len());

    for role in Role::ALL {
        let (name_col, id_col) = role.source_columns();
        for row in rows {
            let Some(obj) = row.as_object() else {
                continue;
            };
            melted.push(MeltedRow {
                branch: cell_text(obj.get(COL_BRANCH)),
                branch_id: obj.get(COL_BRANCH_ID).cloned().unwrap_or(Value::Null),
                state: cell_text(obj.get(COL_STATE)),
                name: cell_text(obj.get(name_col)),
                emp_id: obj.get(id_col).cloned().unwrap_or(Value::Null),
                role,
            });
        }
    }

    melted
}

/// Render a cell as display text. Integral floats lose the fractional part,
/// so a branch id stored as `10.0` stringifies to `"10"`.
pub fn cell_text(cell: Option<&Value>) -> String {
    match cell {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i.to_string(),
            None => match n.as_f64() {
                Some(f) if f.fract() == 0.0 => (f as i64).to_string(),
                _ => n.to_string(),
            },
        },
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_melt_produces_seven_rows_per_input_row() {
        let rows = vec![json!({
            "Branch": "X1", "Branch ID": 10, "State": "NY",
            "AM": "Alice", "AM Emp ID": 5,
        })];
        let melted = melt(&rows);
        assert_eq!(melted.len(), 7);
    }

    #[test]
    fn test_melt_order_is_role_major() {
        let rows = vec![
            json!({"Branch": "X1", "Branch ID": 1, "State": "NY"}),
            json!({"Branch": "X2", "Branch ID": 2, "State": "CA"}),
        ];
        let melted = melt(&rows);

        // First the AM slot of every row, then the DM slot of every row, ...
        assert_eq!(melted[0].role, Role::Am);
        assert_eq!(melted[0].branch, "X1");
        assert_eq!(melted[1].role, Role::Am);
        assert_eq!(melted[1].branch, "X2");
        assert_eq!(melted[2].role, Role::Dm);
        assert_eq!(melted[2].branch, "X1");
        assert_eq!(melted.last().unwrap().role, Role::Cm);
        assert_eq!(melted.last().unwrap().branch, "X2");
    }

    #[test]
    fn test_melt_slices_role_columns() {
        let rows = vec![json!({
            "Branch": "X1", "Branch ID": 10, "State": "NY",
            "Senior ZH": "Zara", "Senior ZH Emp ID": 77,
            "SCH Name": "Carl", "SCH EMP ID": 88,
        })];
        let melted = melt(&rows);

        let zh = melted.iter().find(|m| m.role == Role::Zh).unwrap();
        assert_eq!(zh.name, "Zara");
        assert_eq!(zh.emp_id, json!(77));

        let cm = melted.iter().find(|m| m.role == Role::Cm).unwrap();
        assert_eq!(cm.name, "Carl");
        assert_eq!(cm.emp_id, json!(88));
    }

    #[test]
    fn test_absent_role_columns_become_blank_slots() {
        let rows = vec![json!({"Branch": "X1", "Branch ID": 10, "State": "NY"})];
        let melted = melt(&rows);
        for row in &melted {
            assert_eq!(row.name, "");
            assert_eq!(row.emp_id, Value::Null);
        }
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(Some(&json!("X1"))), "X1");
        assert_eq!(cell_text(Some(&json!(10))), "10");
        assert_eq!(cell_text(Some(&json!(10.0))), "10");
        assert_eq!(cell_text(Some(&json!(10.5))), "10.5");
        assert_eq!(cell_text(Some(&Value::Null)), "");
        assert_eq!(cell_text(None), "");
    }
}
