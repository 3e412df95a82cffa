//! Quick prompts — canned statements the front-end offers as one-tap examples.

use rand::seq::SliceRandom;

use crate::translation::models::SpeakerRole;

pub const DEFAULT_SAMPLE_SIZE: usize = 3;

const FOUNDER_PROMPTS: &[&str] = &[
    "我们下个月就能盈利",
    "我们没有竞争对手",
    "这是一个万亿级的市场",
    "我们的团队来自BAT",
    "用户留存非常健康",
    "我们正在和几家头部机构谈",
    "这轮估值已经很克制了",
    "我们是AI驱动的平台",
    "增长完全是自然流量",
    "我们的护城河是数据",
];

const INVESTOR_PROMPTS: &[&str] = &[
    "我们非常看好这个赛道",
    "可以保持联系",
    "我们更倾向于跟投",
    "需要内部再讨论一下",
    "你们还是有点早期",
    "我们是创始人友好型基金",
    "等你们有更多数据再聊",
    "估值方面我们可以再看看",
    "我们投人不投事",
    "这个方向很有意思",
];

/// All canned statements for `role`.
pub fn all(role: SpeakerRole) -> &'static [&'static str] {
    match role {
        SpeakerRole::Founder => FOUNDER_PROMPTS,
        SpeakerRole::Investor => INVESTOR_PROMPTS,
    }
}

/// Picks up to `count` distinct statements for `role`, uniformly without replacement.
pub fn sample(role: SpeakerRole, count: usize) -> Vec<&'static str> {
    let mut rng = rand::thread_rng();
    all(role).choose_multiple(&mut rng, count).copied().collect()
}
