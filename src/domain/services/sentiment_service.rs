// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::config::settings::AnalysisSettings;
use crate::domain::models::sentiment::{SentimentLabel, SentimentResult};

/// 词级情感词典
///
/// 每个词条对应一个 (极性, 主观性) 对。极性范围 [-1, 1]，主观性范围 [0, 1]。
/// 词典为固定常量，评分是文本的纯函数。
static LEXICON: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        // Positive valence
        ("good", (0.7, 0.6)),
        ("great", (0.8, 0.75)),
        ("excellent", (1.0, 1.0)),
        ("amazing", (0.6, 0.9)),
        ("wonderful", (1.0, 1.0)),
        ("fantastic", (0.4, 0.9)),
        ("awesome", (1.0, 1.0)),
        ("superb", (0.9, 0.9)),
        ("outstanding", (0.9, 0.9)),
        ("brilliant", (0.9, 0.9)),
        ("perfect", (1.0, 1.0)),
        ("beautiful", (0.85, 1.0)),
        ("impressive", (1.0, 1.0)),
        ("incredible", (0.9, 0.9)),
        ("remarkable", (0.75, 0.75)),
        ("delightful", (1.0, 1.0)),
        ("pleasant", (0.73, 0.76)),
        ("love", (0.5, 0.6)),
        ("loved", (0.7, 0.8)),
        ("loves", (0.5, 0.6)),
        ("like", (0.3, 0.4)),
        ("liked", (0.4, 0.5)),
        ("enjoy", (0.4, 0.5)),
        ("enjoyed", (0.5, 0.6)),
        ("best", (1.0, 0.3)),
        ("better", (0.5, 0.5)),
        ("happy", (0.8, 1.0)),
        ("happily", (0.8, 1.0)),
        ("joy", (0.8, 0.6)),
        ("glad", (0.5, 1.0)),
        ("excited", (0.34, 0.7)),
        ("exciting", (0.45, 0.8)),
        ("satisfied", (0.5, 0.44)),
        ("satisfying", (0.5, 0.5)),
        ("helpful", (0.3, 0.3)),
        ("reliable", (0.3, 0.6)),
        ("efficient", (0.4, 0.5)),
        ("effective", (0.6, 0.6)),
        ("valuable", (0.4, 0.5)),
        ("success", (0.75, 0.5)),
        ("successful", (0.75, 0.65)),
        ("win", (0.6, 0.5)),
        ("winner", (0.7, 0.6)),
        ("recommend", (0.4, 0.4)),
        ("recommended", (0.5, 0.5)),
        ("easy", (0.43, 0.83)),
        ("fast", (0.2, 0.5)),
        ("revolutionary", (0.5, 0.8)),
        ("innovative", (0.5, 0.6)),
        ("endless", (0.3, 0.6)),
        // Negative valence
        ("bad", (-0.7, 0.67)),
        ("terrible", (-1.0, 1.0)),
        ("awful", (-1.0, 1.0)),
        ("horrible", (-1.0, 1.0)),
        ("poor", (-0.4, 0.6)),
        ("worst", (-1.0, 1.0)),
        ("worse", (-0.5, 0.6)),
        ("hate", (-0.8, 0.9)),
        ("hated", (-0.9, 0.9)),
        ("hates", (-0.8, 0.9)),
        ("dislike", (-0.4, 0.6)),
        ("sad", (-0.5, 1.0)),
        ("unhappy", (-0.6, 0.7)),
        ("angry", (-0.5, 0.7)),
        ("annoyed", (-0.5, 0.6)),
        ("annoying", (-0.6, 0.7)),
        ("frustrated", (-0.6, 0.7)),
        ("frustrating", (-0.6, 0.7)),
        ("disappointed", (-0.75, 0.75)),
        ("disappointing", (-0.6, 0.7)),
        ("failure", (-0.6, 0.6)),
        ("failed", (-0.5, 0.5)),
        ("fail", (-0.5, 0.5)),
        ("broken", (-0.4, 0.5)),
        ("problem", (-0.3, 0.3)),
        ("problems", (-0.3, 0.3)),
        ("issue", (-0.2, 0.3)),
        ("issues", (-0.2, 0.3)),
        ("wrong", (-0.5, 0.5)),
        ("useless", (-0.5, 0.6)),
        ("worthless", (-0.6, 0.7)),
        ("waste", (-0.4, 0.4)),
        ("slow", (-0.3, 0.4)),
        ("difficult", (-0.5, 1.0)),
        ("hard", (-0.3, 0.6)),
        ("confusing", (-0.4, 0.6)),
        ("complicated", (-0.3, 0.5)),
        ("expensive", (-0.3, 0.5)),
        ("unreliable", (-0.4, 0.6)),
        ("mediocre", (-0.3, 0.6)),
        ("pathetic", (-0.8, 0.9)),
        ("ugly", (-0.7, 0.9)),
        ("boring", (-0.6, 0.8)),
        ("painful", (-0.7, 0.8)),
        ("dangerous", (-0.6, 0.9)),
        ("risky", (-0.5, 0.6)),
        ("risk", (-0.3, 0.4)),
        ("risks", (-0.3, 0.4)),
        ("concerned", (-0.4, 0.6)),
        ("concern", (-0.3, 0.5)),
        ("concerns", (-0.3, 0.5)),
        ("scam", (-0.8, 0.8)),
        ("fraud", (-0.8, 0.7)),
        ("fake", (-0.5, 0.6)),
        ("crash", (-0.4, 0.4)),
        ("crashed", (-0.4, 0.4)),
        ("error", (-0.3, 0.3)),
        ("errors", (-0.3, 0.3)),
        ("bug", (-0.3, 0.3)),
        ("bugs", (-0.3, 0.3)),
        ("mistake", (-0.4, 0.4)),
        ("mistakes", (-0.4, 0.4)),
        ("serious", (-0.2, 0.5)),
        ("careful", (-0.1, 0.5)),
    ])
});

/// 否定词集合，出现在观点词前时反转并衰减其极性
static NEGATORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "not", "no", "never", "nothing", "neither", "nor", "cannot", "cant", "dont", "doesnt",
        "didnt", "isnt", "wasnt", "arent", "werent", "wont", "wouldnt", "couldnt", "shouldnt",
        // Contraction stems: "don't" tokenizes to "don" + "t"
        "don", "doesn", "didn", "isn", "wasn", "aren", "weren", "wouldn", "couldn", "shouldn",
        "hardly", "barely",
    ])
});

/// 强化词集合，出现在观点词前时放大其极性
static INTENSIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "very", "really", "extremely", "absolutely", "truly", "highly", "incredibly", "totally",
        "completely", "so",
    ])
});

const NEGATION_FACTOR: f64 = -0.5;
const INTENSIFIER_FACTOR: f64 = 1.3;

/// 分析文本情感
///
/// 对文本做词级词典评分，输出极性、主观性、离散标签和可读描述。
/// 纯函数：相同输入总是产生相同输出，不会阻塞也不会失败。
/// 词典未命中任何词时返回中性结果（极性0.0，主观性0.0）。
///
/// # 参数
///
/// * `text` - 待分析的文本
/// * `analysis` - 分析配置（情感标签阈值）
///
/// # 返回值
///
/// 情感分析结果
pub fn analyze(text: &str, analysis: &AnalysisSettings) -> SentimentResult {
    let tokens = tokenize(text);

    let mut hits: Vec<(f64, f64)> = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let Some(&(base_polarity, subjectivity)) = LEXICON.get(token.as_str()) else {
            continue;
        };

        let mut polarity = base_polarity;
        if i >= 1 && INTENSIFIERS.contains(tokens[i - 1].as_str()) {
            polarity *= INTENSIFIER_FACTOR;
        }
        // Negation may sit directly before the word or before an intensifier
        let negated = (i >= 1 && NEGATORS.contains(tokens[i - 1].as_str()))
            || (i >= 2 && NEGATORS.contains(tokens[i - 2].as_str()));
        if negated {
            polarity *= NEGATION_FACTOR;
        }
        hits.push((polarity.clamp(-1.0, 1.0), subjectivity));
    }

    let (polarity, subjectivity) = if hits.is_empty() {
        (0.0, 0.0)
    } else {
        let n = hits.len() as f64;
        (
            hits.iter().map(|(p, _)| p).sum::<f64>() / n,
            hits.iter().map(|(_, s)| s).sum::<f64>() / n,
        )
    };

    let sentiment = if polarity > analysis.positive_threshold {
        SentimentLabel::Positive
    } else if polarity < analysis.negative_threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentResult {
        polarity: round3(polarity),
        subjectivity: round3(subjectivity),
        sentiment,
        emoji: sentiment.emoji().to_string(),
        color: sentiment.color().to_string(),
        confidence: round3(polarity.abs()),
        description: describe(polarity, subjectivity),
    }
}

/// 生成可读的情感描述
fn describe(polarity: f64, subjectivity: f64) -> String {
    let pol_desc = if polarity > 0.5 {
        "very positive"
    } else if polarity > 0.1 {
        "positive"
    } else if polarity < -0.5 {
        "very negative"
    } else if polarity < 0.0 {
        "negative"
    } else {
        "neutral"
    };

    let subj_desc = if subjectivity > 0.7 {
        "highly subjective"
    } else if subjectivity > 0.3 {
        "moderately subjective"
    } else {
        "objective"
    };

    format!("The text is {} and {}.", pol_desc, subj_desc)
}

/// 小写化并按非字母数字字符切分
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
