use std::fmt::Debug;

use crate::node::Node;

/// Debug printer for the tree.
///
/// Renders one line per node with its cached height and balance factor,
/// indenting `L=` / `R=` children and marking absent subtrees with `∅`.
pub fn print<T: Debug>(node: Option<&Node<T>>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(n) => {
            let child_tab = format!("{tab}  ");
            let left = print(n.left(), &child_tab);
            let right = print(n.right(), &child_tab);
            format!(
                "{:?} [h={}, bf={}]\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.height(),
                n.balance_factor()
            )
        }
    }
}
