//! 按键索引记录的通用工具

use std::collections::HashMap;
use std::hash::Hash;

/// 按键函数把记录建成索引
///
/// 键函数返回 `None` 的记录不进入索引；键重复时后出现的记录覆盖先出现的。
pub fn index_by<T, K, I, F>(items: I, key: F) -> HashMap<K, T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: Fn(&T) -> Option<K>,
{
    let mut indexed = HashMap::new();
    for item in items {
        if let Some(k) = key(&item) {
            indexed.insert(k, item);
        }
    }
    indexed
}

/// 按原顺序取出每条记录的某一列，缺失的跳过
pub fn column<'a, T, K, F>(items: &'a [T], key: F) -> Vec<K>
where
    F: Fn(&'a T) -> Option<K>,
{
    items.iter().filter_map(key).collect()
}
