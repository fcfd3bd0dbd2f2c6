/**
 * Responsibility
 *  - リソースごとの「意味付きID型」を宣言する
 *
 * 置くもの
 *  - KittenTag などのタグ型と PublicResource 実装
 *  - type PublicKittenId = PublicId<KittenTag> のような alias
 *
 * 置かないもの
 *  - decode ロジック / extractor 実装
 */
use super::core::{PublicId, PublicResource};

// kittens
pub enum KittenTag {}

impl PublicResource for KittenTag {
    const NAME: &'static str = "Kitten";
}

pub type PublicKittenId = PublicId<KittenTag>;
