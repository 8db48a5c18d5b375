// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// 关键词提取忽略的最大词长下限：短于4个字符的词被丢弃
const MIN_KEYWORD_CHARS: usize = 4;

/// 匹配所有非单词、非空白字符（标点符号）
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// 固定停用词集合
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us",
        "them", "my", "your", "his", "its", "our", "their", "from", "up", "about", "into",
        "through", "during", "before", "after", "above", "below", "between", "among",
    ])
});

/// 提取关键词
///
/// 小写化、去标点、按空白切分，丢弃停用词和短于4字符的词，
/// 按词频降序排序（频率相同时按首次出现顺序），截断到 `max_keywords`。
/// 纯函数，确定性输出，无外部调用。
pub fn extract_keywords(text: &str, max_keywords: usize) -> Vec<String> {
    let normalized = NON_WORD.replace_all(&text.to_lowercase(), "").to_string();

    // (word, count) in first-occurrence order; stable sort keeps that order on ties
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in normalized.split_whitespace() {
        if STOP_WORDS.contains(word) || word.chars().count() < MIN_KEYWORD_CHARS {
            continue;
        }
        if let Some(&slot) = index.get(word) {
            counts[slot].1 += 1;
        } else {
            index.insert(word.to_string(), counts.len());
            counts.push((word.to_string(), 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(max_keywords);
    counts.into_iter().map(|(word, _)| word).collect()
}
