use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};

/// 简写分组（中间层）
struct Group {
    /// 分组前缀（如 "mx"）
    prefix: &'static str,
    /// 叶子前缀；为空时分组本身就是叶子（如 "scale-x"）
    leaves: &'static [&'static str],
}

/// 简写家族（根）
struct Family {
    /// 根前缀（如 "m"）
    root: &'static str,
    groups: &'static [Group],
}

/// 所有支持归并的家族，按输出顺序排列
static FAMILIES: &[Family] = &[
    Family {
        root: "m",
        groups: &[
            Group {
                prefix: "mx",
                leaves: &["ml", "mr"],
            },
            Group {
                prefix: "my",
                leaves: &["mt", "mb"],
            },
        ],
    },
    Family {
        root: "p",
        groups: &[
            Group {
                prefix: "px",
                leaves: &["pl", "pr"],
            },
            Group {
                prefix: "py",
                leaves: &["pt", "pb"],
            },
        ],
    },
    Family {
        root: "scroll-m",
        groups: &[
            Group {
                prefix: "scroll-mx",
                leaves: &["scroll-ml", "scroll-mr"],
            },
            Group {
                prefix: "scroll-my",
                leaves: &["scroll-mt", "scroll-mb"],
            },
        ],
    },
    Family {
        root: "scroll-p",
        groups: &[
            Group {
                prefix: "scroll-px",
                leaves: &["scroll-pl", "scroll-pr"],
            },
            Group {
                prefix: "scroll-py",
                leaves: &["scroll-pt", "scroll-pb"],
            },
        ],
    },
    Family {
        root: "rounded",
        groups: &[
            Group {
                prefix: "rounded-t",
                leaves: &["rounded-tl", "rounded-tr"],
            },
            Group {
                prefix: "rounded-r",
                leaves: &["rounded-tr", "rounded-br"],
            },
            Group {
                prefix: "rounded-b",
                leaves: &["rounded-bl", "rounded-br"],
            },
            Group {
                prefix: "rounded-l",
                leaves: &["rounded-tl", "rounded-bl"],
            },
        ],
    },
    Family {
        root: "border",
        groups: &[
            Group {
                prefix: "border-x",
                leaves: &["border-l", "border-r"],
            },
            Group {
                prefix: "border-y",
                leaves: &["border-t", "border-b"],
            },
        ],
    },
    Family {
        root: "scale",
        groups: &[
            Group {
                prefix: "scale-x",
                leaves: &[],
            },
            Group {
                prefix: "scale-y",
                leaves: &[],
            },
        ],
    },
    Family {
        root: "inset",
        groups: &[
            Group {
                prefix: "inset-x",
                leaves: &["left", "right"],
            },
            Group {
                prefix: "inset-y",
                leaves: &["top", "bottom"],
            },
        ],
    },
];

/// 叶子：收集到的值（保持首次出现顺序）
struct Leaf {
    prefix: &'static str,
    values: IndexSet<String>,
}

/// 展开后的分组，叶子按下标引用
struct GroupNode {
    prefix: &'static str,
    leaves: Vec<usize>,
}

struct FamilyNode {
    prefix: &'static str,
    groups: Vec<GroupNode>,
    /// 家族内去重后的叶子，按首次出现顺序
    leaves: Vec<usize>,
}

/// 由 `FAMILIES` 展开的归并森林
///
/// 同一家族内相同前缀的叶子只建一次，可以同时属于多个分组
/// （如 `rounded-tr` 既在 `rounded-t` 下也在 `rounded-r` 下）。
struct Forest {
    leaves: Vec<Leaf>,
    families: Vec<FamilyNode>,
    /// 前缀 → 该前缀覆盖的叶子
    by_prefix: HashMap<&'static str, Vec<usize>>,
}

impl Forest {
    fn build() -> Self {
        let mut forest = Forest {
            leaves: Vec::new(),
            families: Vec::new(),
            by_prefix: HashMap::new(),
        };

        for family in FAMILIES {
            let mut local: HashMap<&'static str, usize> = HashMap::new();
            let mut node = FamilyNode {
                prefix: family.root,
                groups: Vec::new(),
                leaves: Vec::new(),
            };

            for group in family.groups {
                let prefixes: &[&'static str] = if group.leaves.is_empty() {
                    std::slice::from_ref(&group.prefix)
                } else {
                    group.leaves
                };
                let mut ids = Vec::new();
                for &prefix in prefixes {
                    let id = *local.entry(prefix).or_insert_with(|| {
                        forest.leaves.push(Leaf {
                            prefix,
                            values: IndexSet::new(),
                        });
                        node.leaves.push(forest.leaves.len() - 1);
                        forest.leaves.len() - 1
                    });
                    forest.by_prefix.insert(prefix, vec![id]);
                    ids.push(id);
                }
                forest.by_prefix.insert(group.prefix, ids.clone());
                node.groups.push(GroupNode {
                    prefix: group.prefix,
                    leaves: ids,
                });
            }

            forest.by_prefix.insert(family.root, node.leaves.clone());
            forest.families.push(node);
        }

        forest
    }

    /// 把值下发到前缀覆盖的所有叶子
    fn assign(&mut self, leaves: &[usize], value: &str) {
        for id in leaves {
            self.leaves[*id].values.insert(value.to_string());
        }
    }

    /// 所有给定叶子共有的值，顺序取第一个叶子
    fn common(&self, leaves: &[usize]) -> IndexSet<String> {
        let Some((first, rest)) = leaves.split_first() else {
            return IndexSet::new();
        };
        self.leaves[*first]
            .values
            .iter()
            .filter(|v| rest.iter().all(|id| self.leaves[*id].values.contains(*v)))
            .cloned()
            .collect()
    }

    /// 归并一个家族
    ///
    /// 所有叶子共有的值归到根前缀；其余的值按分组顺序归到第一个能
    /// 完整覆盖它的分组，已被某个分组占用的叶子值不再参与后续分组；
    /// 剩下的值以叶子前缀输出。输出顺序为叶子、分组、根。
    fn resolve(&self, family: &FamilyNode, out: &mut Vec<String>) {
        let root = self.common(&family.leaves);
        let mut claimed: HashSet<(usize, String)> = HashSet::new();
        let mut grouped = Vec::new();

        for group in &family.groups {
            for value in self.common(&group.leaves) {
                if root.contains(&value)
                    || group
                        .leaves
                        .iter()
                        .any(|id| claimed.contains(&(*id, value.clone())))
                {
                    continue;
                }
                for id in &group.leaves {
                    claimed.insert((*id, value.clone()));
                }
                grouped.push(compose_class(group.prefix, &value));
            }
        }

        for id in &family.leaves {
            let leaf = &self.leaves[*id];
            for value in &leaf.values {
                if !root.contains(value) && !claimed.contains(&(*id, value.clone())) {
                    out.push(compose_class(leaf.prefix, value));
                }
            }
        }
        out.extend(grouped);
        out.extend(root.iter().map(|value| compose_class(family.prefix, value)));
    }
}

/// 拆分类名为 (前缀, 值)
///
/// 值带有符号：`-ml-3` → `("ml", "-3")`。任意值的方括号内不参与拆分。
fn split_class(class: &str) -> Option<(&str, String)> {
    let (negative, body) = match class.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, class),
    };

    let split_at = if body.ends_with(']') {
        body.find("-[")?
    } else {
        body.rfind('-')?
    };
    let (prefix, value) = (&body[..split_at], &body[split_at + 1..]);
    if prefix.is_empty() || value.is_empty() {
        return None;
    }

    let value = if negative {
        format!("-{}", value)
    } else {
        value.to_string()
    };
    Some((prefix, value))
}

fn compose_class(prefix: &str, value: &str) -> String {
    match value.strip_prefix('-') {
        Some(abs) => format!("-{}-{}", prefix, abs),
        None => format!("{}-{}", prefix, value),
    }
}

/// 将长写类归并为简写类
///
/// 某个值只有在分组的**所有**子节点上都出现时才合并到分组前缀。
/// 非家族类名保持原始顺序排在最前，家族类名按家族顺序输出在后。
///
/// # 示例
///
/// ```
/// use crosswind_core::reduce::reduce_classes;
///
/// let classes = vec![
///     "pt-4".to_string(),
///     "pr-4".to_string(),
///     "pb-4".to_string(),
///     "pl-4".to_string(),
/// ];
/// assert_eq!(reduce_classes(classes), vec!["p-4"]);
/// ```
pub fn reduce_classes(classes: Vec<String>) -> Vec<String> {
    if classes.is_empty() {
        return classes;
    }

    let mut forest = Forest::build();
    let mut result: Vec<String> = Vec::new();
    let mut matched = false;

    // 1. 分发家族类名的值，其余直接保留
    for class in &classes {
        let target = split_class(class)
            .and_then(|(prefix, value)| forest.by_prefix.get(prefix).cloned().map(|ids| (ids, value)));
        match target {
            Some((ids, value)) => {
                forest.assign(&ids, &value);
                matched = true;
            }
            None => result.push(class.clone()),
        }
    }

    // 快速路径：没有家族类名
    if !matched {
        return classes;
    }

    // 2. 逐个家族归并
    for family in &forest.families {
        forest.resolve(family, &mut result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // ========== padding ==========

    #[test]
    fn test_padding_all_sides() {
        let result = reduce_classes(classes(&["pt-4", "pr-4", "pb-4", "pl-4"]));
        assert_eq!(result, vec!["p-4"]);
    }

    #[test]
    fn test_padding_missing_side() {
        // 缺少 pl：不会形成 p-4，只有完整的 pt/pb 合并为 py
        let result = reduce_classes(classes(&["pt-4", "pr-4", "pb-4"]));
        assert_eq!(result, vec!["pr-4", "py-4"]);

        let result = reduce_classes(classes(&["pt-4", "pr-4"]));
        assert_eq!(result, vec!["pr-4", "pt-4"]);
    }

    #[test]
    fn test_padding_axes() {
        let result = reduce_classes(classes(&["pl-6", "pr-6", "pt-8", "pb-8"]));
        assert_eq!(result, vec!["px-6", "py-8"]);
    }

    #[test]
    fn test_padding_mixed_signs() {
        let result = reduce_classes(classes(&["-pl-3", "-pr-3", "-pt-3", "pb-15"]));
        assert_eq!(result, vec!["-pt-3", "pb-15", "-px-3"]);
    }

    // ========== margin ==========

    #[test]
    fn test_negative_and_positive_never_merge() {
        let result = reduce_classes(classes(&["-ml-3", "mr-3"]));
        assert_eq!(result, vec!["-ml-3", "mr-3"]);
    }

    #[test]
    fn test_negative_merge() {
        let result = reduce_classes(classes(&["-ml-3", "-mr-3"]));
        assert_eq!(result, vec!["-mx-3"]);
    }

    #[test]
    fn test_margin_mixed_with_other_classes() {
        let result = reduce_classes(classes(&[
            "foo", "ml-13", "bar", "md-18", "mx-15", "m-3", "mt-13", "my-15", "mb-13", "mx1",
        ]));
        assert_eq!(
            result,
            vec!["foo", "bar", "md-18", "mx1", "ml-13", "my-13", "m-15", "m-3"]
        );
    }

    #[test]
    fn test_variant_prefixed_classes_pass_through() {
        let result = reduce_classes(classes(&["hover:ml-13", "hover:mr-13"]));
        assert_eq!(result, vec!["hover:ml-13", "hover:mr-13"]);
    }

    // ========== other families ==========

    #[test]
    fn test_rounded_corners() {
        let result = reduce_classes(classes(&[
            "rounded-tl-lg",
            "rounded-tr-lg",
            "rounded-bl-lg",
            "rounded-br-lg",
        ]));
        assert_eq!(result, vec!["rounded-lg"]);
    }

    #[test]
    fn test_rounded_vertical_sides() {
        let result = reduce_classes(classes(&["rounded-tr-lg", "rounded-br-lg"]));
        assert_eq!(result, vec!["rounded-r-lg"]);

        let result = reduce_classes(classes(&["rounded-bl-md", "rounded-tl-md"]));
        assert_eq!(result, vec!["rounded-l-md"]);
    }

    #[test]
    fn test_rounded_shared_corner_used_once() {
        // tr 已归入 rounded-t，rounded-r 不能再占用它
        let result = reduce_classes(classes(&["rounded-tl-lg", "rounded-tr-lg", "rounded-br-lg"]));
        assert_eq!(result, vec!["rounded-br-lg", "rounded-t-lg"]);
    }

    #[test]
    fn test_border_sides() {
        let result = reduce_classes(classes(&["border-t-2", "border-b-2", "border-x1"]));
        assert_eq!(result, vec!["border-y-2", "border-x1"]);
    }

    #[test]
    fn test_scale_axes() {
        let result = reduce_classes(classes(&["scale-x-75", "scale-y-75"]));
        assert_eq!(result, vec!["scale-75"]);

        let result = reduce_classes(classes(&["-scale-x-75", "scale-y-105"]));
        assert_eq!(result, vec!["-scale-x-75", "scale-y-105"]);
    }

    #[test]
    fn test_inset_sides() {
        let result = reduce_classes(classes(&["top-0", "right-0", "bottom-0", "left-0"]));
        assert_eq!(result, vec!["inset-0"]);
    }

    #[test]
    fn test_arbitrary_values() {
        let result = reduce_classes(classes(&["scroll-pt-[100px]", "scroll-pr-[100px]", "scroll-pb-[100px]", "scroll-pl-[100px]"]));
        assert_eq!(result, vec!["scroll-p-[100px]"]);

        let result = reduce_classes(classes(&["mt-[calc(100%-2px)]", "mb-[calc(100%-2px)]"]));
        assert_eq!(result, vec!["my-[calc(100%-2px)]"]);
    }

    // ========== 通用性质 ==========

    #[test]
    fn test_idempotent() {
        let input = classes(&[
            "foo", "ml-13", "bar", "mx-15", "m-3", "mt-13", "my-15", "mb-13", "-pl-3", "pr-2",
        ]);
        let once = reduce_classes(input);
        let twice = reduce_classes(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_family_classes() {
        let input = classes(&["text-center", "hover:text-base", "block"]);
        assert_eq!(reduce_classes(input.clone()), input);
    }

    #[test]
    fn test_empty() {
        assert!(reduce_classes(Vec::new()).is_empty());
    }

    #[test]
    fn test_split_class() {
        assert_eq!(split_class("ml-13"), Some(("ml", "13".to_string())));
        assert_eq!(split_class("-ml-3"), Some(("ml", "-3".to_string())));
        assert_eq!(split_class("scale-x-75"), Some(("scale-x", "75".to_string())));
        assert_eq!(
            split_class("mt-[calc(100%-2px)]"),
            Some(("mt", "[calc(100%-2px)]".to_string()))
        );
        assert_eq!(split_class("block"), None);
    }
}
