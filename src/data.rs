// src/data.rs
//
// Static configuration tables: the gold-equipment target list, the
// set-name → set-id mapping, and the ordered substring → token table
// the normalizer substitutes with. Embedded defaults below; all three
// can be swapped at startup from a JSON file without touching any
// extraction logic.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Gold-quality equipment display names the probe looks for.
pub const GOLD_TARGETS: &[&str] = &[
    "长息辅助臂", "长息护手·壹型", "长息护手", "长息蓄电核", "长息蓄电核·壹型", "长息装甲",
    "浊流切割炬", "悬河供氧栓", "潮涌手甲", "落潮轻甲",
    "50式应龙短刃·壹型", "50式应龙短刃", "50式应龙雷达", "50式应龙护手·壹型", "50式应龙护手",
    "50式应龙轻甲", "50式应龙重甲",
    "M.I.警用刺刃·壹型", "M.I.警用刺刃", "M.I.警用工具组", "M.I.警用瞄具", "M.I.警用臂环",
    "M.I.警用手环·壹型", "M.I.警用手环", "M.I.警用手套", "M.I.警用罩衣·贰型", "M.I.警用罩衣·壹型",
    "M.I.警用罩衣", "M.I.警用护甲",
    "动火用电力匣", "动火用测温镜", "动火用储能匣", "动火用手甲·壹型", "动火用手甲", "动火用外骨骼",
    "轻超域稳定盘", "轻超域分析环", "轻超域护手", "轻超域护板",
    "拓荒增量供氧栓", "拓荒通信器·壹型", "拓荒通信器", "拓荒耐蚀手套", "拓荒护甲·叄型",
    "拓荒护甲·贰型", "拓荒护甲·壹型", "拓荒护甲",
    "脉冲式校准器", "脉冲式手套", "脉冲式干扰服",
    "碾骨小雕像·壹型", "碾骨小雕像", "碾骨面具·壹型", "碾骨面具", "碾骨披巾·壹型", "碾骨披巾",
    "碾骨重护甲·壹型", "碾骨重护甲",
    "生物辅助护盾针", "生物辅助护板", "生物辅助接驳器·壹型", "生物辅助接驳器", "生物辅助手甲",
    "生物辅助臂甲", "生物辅助胸甲", "生物辅助重甲",
    "点剑火石", "点剑战术手甲", "点剑战术手套", "点剑重装甲",
    "纾难识别牌", "纾难识别牌·壹型", "纾难印章", "纾难印章·壹型",
];

/// Set display name → stable set id.
pub const SET_IDS: &[(&str, &str)] = &[
    ("长息装备组", "changxi"),
    ("潮涌装备组", "chaoyong"),
    ("50式应龙装备组", "50shi-yinglong"),
    ("M.I.警用装备组", "mi-jingyong"),
    ("动火用装备组", "donghuoyong"),
    ("轻超域装备组", "qing-chaoyu"),
    ("拓荒装备组", "tuohuang"),
    ("脉冲式装备组", "maichongshi"),
    ("碾骨装备组", "niangu"),
    ("生物辅助装备组", "shengwu-fuzhu"),
    ("点剑装备组", "dianjian"),
    ("纾难装备组", "shunan"),
];

/// Ordered substring → romanized-token table. Order is significant:
/// substitutions run top to bottom, first occurrence only.
pub const ID_TOKENS: &[(&str, &str)] = &[
    ("长息", "changxi"),
    ("辅助臂", "fuzhubi"),
    ("护手", "hushou"),
    ("蓄电核", "xudianahe"),
    ("装甲", "zhuangjia"),
    ("浊流", "zhuoliu"),
    ("切割炬", "qiegejv"),
    ("悬河", "xuanhe"),
    ("供氧栓", "gongyangshuan"),
    ("潮涌", "chaoyong"),
    ("手甲", "shoujia"),
    ("落潮", "luochao"),
    ("轻甲", "qingjia"),
    ("应龙", "yinglong"),
    ("短刃", "duanren"),
    ("雷达", "leida"),
    ("重甲", "zhongjia"),
    ("警用", "jingyong"),
    ("刺刃", "ciren"),
    ("工具组", "gongjuzu"),
    ("瞄具", "miaoyu"),
    ("臂环", "bihuan"),
    ("手环", "shouhuan"),
    ("手套", "shoutao"),
    ("罩衣", "zhaoyi"),
    ("护甲", "hujia"),
    ("动火用", "donghuoyong"),
    ("电力匣", "dianlixia"),
    ("测温镜", "cewenjing"),
    ("储能匣", "chunengxia"),
    ("外骨骼", "waiguge"),
    ("轻超域", "qingchaoyu"),
    ("稳定盘", "wendingpan"),
    ("分析环", "fenxihuan"),
    ("护板", "huban"),
    ("拓荒", "tuohuang"),
    ("增量", "zengliang"),
    ("通信器", "tongxinqi"),
    ("耐蚀", "naishi"),
    ("脉冲式", "maichongshi"),
    ("校准器", "xiaozhunqi"),
    ("干扰服", "ganraofu"),
    ("碾骨", "niangu"),
    ("小雕像", "xiaodiaoxiang"),
    ("面具", "mianju"),
    ("披巾", "pijin"),
    ("重护甲", "zhonghujia"),
    ("生物辅助", "shengwufuzhu"),
    ("护盾针", "hudunzhen"),
    ("接驳器", "jieboqi"),
    ("臂甲", "bijia"),
    ("胸甲", "xiongjia"),
    ("点剑", "dianjian"),
    ("火石", "huoshi"),
    ("战术", "zhanshu"),
    ("纾难", "shunan"),
    ("识别牌", "shibiepai"),
    ("印章", "yinzhang"),
];

/// Attribute-name substrings accepted into `baseStats`.
pub const VALID_ATTRS: &[&str] = &[
    "防御力", "生命值", "攻击力", "力量", "敏捷", "智识", "意志",
    "暴击率", "暴击伤害", "终结技充能效率", "技能伤害", "普通攻击伤害", "战技伤害",
    "灼热伤害", "冰冷伤害", "腐蚀伤害", "电击伤害", "物理伤害",
];

/// The three tables as runtime values, injectable into the normalizer
/// and extractor.
#[derive(Clone, Debug, Deserialize)]
pub struct Tables {
    pub targets: Vec<String>,
    pub set_ids: Vec<(String, String)>,
    pub tokens: Vec<(String, String)>,
}

impl Tables {
    pub fn builtin() -> Self {
        Self {
            targets: GOLD_TARGETS.iter().map(|s| s!(*s)).collect(),
            set_ids: SET_IDS.iter().map(|(k, v)| (s!(*k), s!(*v))).collect(),
            tokens: ID_TOKENS.iter().map(|(k, v)| (s!(*k), s!(*v))).collect(),
        }
    }

    /// Load replacement tables from a JSON file:
    /// `{ "targets": [...], "set_ids": [[name, id], ...], "tokens": [[cn, py], ...] }`
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let tables: Tables = serde_json::from_str(&text)?;
        if tables.tokens.is_empty() {
            return Err("tables file has an empty token list".into());
        }
        Ok(tables)
    }

    pub fn set_id_for(&self, set_name: &str) -> String {
        self.set_ids
            .iter()
            .find(|(name, _)| name == set_name)
            .map(|(_, id)| id.clone())
            .unwrap_or_default()
    }

    pub fn is_target(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t == name)
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::builtin()
    }
}
