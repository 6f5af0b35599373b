use crate::table::{GeneColumn, Table};
use crate::Groups;
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The value of the gene column shared by every row of a group.
///
/// Two keys are equal only when their raw text is identical; no trimming,
/// case folding or numeric coercion takes place. Keys that read as numbers
/// sort before other keys, by value and then by text, so that `2` comes
/// before `10`. The rest sort by text.
#[derive(Debug, Clone)]
pub struct GroupKey {
    text: String,
    number: Option<f64>,
}

impl GroupKey {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            number: text.parse::<f64>().ok(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Name of the file this group is written to, `<key>.<extension>`.
    ///
    /// The key is used verbatim. A key that is not a valid file name fails
    /// when the file is created.
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.text, extension)
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.text.cmp(&other.text)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.text.cmp(&other.text),
        }
    }
}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Partitions the rows of `table` by the value of `column`.
///
/// Every row lands in exactly one group and rows keep their input order
/// within a group. The table itself is left untouched.
pub fn partition<'t>(table: &'t Table, column: &GeneColumn) -> Groups<'t> {
    let mut groups = Groups::new();
    for row in table.rows() {
        groups
            .entry(GroupKey::new(column.value(row)))
            .or_insert_with(Vec::new)
            .push(row);
    }
    debug!(
        "partitioned {} rows into {} groups on column '{}'",
        table.row_count(),
        groups.len(),
        column.name()
    );
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::TableBuilder;
    use csv::StringRecord;
    use proptest::prelude::*;
    use std::error::Error;

    fn keys(groups: &Groups) -> Vec<String> {
        groups.keys().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_partition_by_gene() -> Result<(), Box<dyn Error>> {
        let table = TableBuilder::new().from_reader(
            "id,chr,pos,gene\n1,1,100,TP53\n2,1,200,TP53\n3,1,300,BRCA1\n".as_bytes(),
        )?;
        let column = table.resolve_column(4)?;
        let groups = partition(&table, &column);
        assert_eq!(keys(&groups), vec!["BRCA1", "TP53"]);
        let tp53 = &groups[&GroupKey::new("TP53")];
        assert_eq!(tp53.len(), 2);
        assert_eq!(tp53[0], &table.rows()[0]);
        assert_eq!(tp53[1], &table.rows()[1]);
        Ok(())
    }

    #[test]
    fn test_keys_match_exactly() -> Result<(), Box<dyn Error>> {
        let table = TableBuilder::new()
            .from_reader("id,gene\n1,tp53\n2,TP53\n3, TP53\n4,\n".as_bytes())?;
        let groups = partition(&table, &table.resolve_column(2)?);
        assert_eq!(groups.len(), 4);
        assert_eq!(groups[&GroupKey::new("")].len(), 1);
        Ok(())
    }

    #[test]
    fn test_numeric_keys_sort_by_value_first() {
        let mut keys: Vec<GroupKey> = ["b", "10", "2", "A", "2.0", "-1"]
            .iter()
            .map(|k| GroupKey::new(k))
            .collect();
        keys.sort();
        let text: Vec<&str> = keys.iter().map(|k| k.as_str()).collect();
        assert_eq!(text, vec!["-1", "2", "2.0", "10", "A", "b"]);
    }

    #[test]
    fn test_numerically_equal_keys_stay_distinct() {
        assert_ne!(GroupKey::new("1"), GroupKey::new("1.0"));
        assert_ne!(
            GroupKey::new("1").cmp(&GroupKey::new("1.0")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_file_name_is_verbatim() {
        assert_eq!(GroupKey::new("CDK11A").file_name("tsv"), "CDK11A.tsv");
        assert_eq!(GroupKey::new("RP11-34P13.7").file_name("tsv"), "RP11-34P13.7.tsv");
    }

    fn build_table(genes: &[String]) -> Table {
        Table::new(
            StringRecord::from(vec!["id", "gene"]),
            genes
                .iter()
                .enumerate()
                .map(|(idx, gene)| StringRecord::from(vec![idx.to_string(), gene.clone()]))
                .collect(),
        )
        .unwrap()
    }

    proptest! {
        #[test]
        fn prop_groups_partition_the_table(genes in prop::collection::vec("[A-C0-9]{0,2}", 0..64)) {
            let table = build_table(&genes);
            let column = table.resolve_column(2).unwrap();
            let groups = partition(&table, &column);

            let total: usize = groups.values().map(|rows| rows.len()).sum();
            prop_assert_eq!(total, table.row_count());

            for (key, rows) in &groups {
                prop_assert!(!rows.is_empty());
                let mut last_id = None;
                for row in rows {
                    prop_assert_eq!(column.value(row), key.as_str());
                    let id: usize = row[0].parse().unwrap();
                    prop_assert!(last_id.map_or(true, |last| last < id));
                    last_id = Some(id);
                }
            }
        }

        #[test]
        fn prop_partition_is_deterministic(genes in prop::collection::vec("[A-Z]{1,3}", 0..64)) {
            let table = build_table(&genes);
            let column = table.resolve_column(2).unwrap();
            let first = partition(&table, &column);
            let second = partition(&table, &column);
            prop_assert_eq!(keys(&first), keys(&second));
            prop_assert_eq!(first, second);
        }
    }
}
