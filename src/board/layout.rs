//! The board: a fixed, ordered sequence of squares.
//!
//! The standard board has 60 squares, 10 per row. Square 0 is START and
//! the last square is GOAL. Custom boards go through the same checks.

use std::sync::Arc;

use serde::Serialize;

use super::square::SquareType::{
    Goal, Normal, Payday, ProjectSuccess, Promotion, Start, Training, Trouble,
};
use super::square::{Square, SquareType};
use crate::core::GameError;

/// Squares per row in the layout grid.
pub const SQUARES_PER_ROW: usize = 10;

/// (label, type, description) for every square of the standard board.
const STANDARD_SQUARES: &[(&str, SquareType, &str)] = &[
    ("START", Start, "デロイト トーマツでの冒険が今、ここから始まる！"),
    ("新人研修", Normal, "コンサルタントとしての心構えを学ぶ。"),
    ("初給与", Payday, "最初のインパクト報酬を獲得！"),
    ("議事録作成", Normal, "正確かつ迅速なアウトプットで信頼を築く。"),
    ("徹夜作業", Trouble, "資料の完成度が裏目に... 体力とリソースを消耗。"),
    ("リサーチ業務", Normal, "誰も気づかないインサイトを発見。"),
    ("C昇格", Promotion, "コンサルタントへ昇格！専門性が認められました。"),
    ("PJ成功", ProjectSuccess, "プロジェクトが大成功！クライアントから感謝状。"),
    ("ロジカルシンキング", Training, "思考の深さが一段階アップ！"),
    ("給料", Payday, "成果が報酬として反映される。"),
    ("炎上案件", Trouble, "トラブルの火消しに奔走。試練の時！"),
    ("顧客提案", Normal, "革新的な提案でコンペを勝ち抜く。"),
    ("DU研修", Training, "Deloitte Universityでグローバルな視座を養う。"),
    ("メンタリング", Normal, "次世代を導くリーダーシップの発揮。"),
    ("SC昇格", Promotion, "シニアコンサルタントへ！チームの要として活躍。"),
    ("ボーナス", Payday, "SCとしての卓越した貢献へのボーナス！"),
    ("プレゼン成功", ProjectSuccess, "経営層へのプレゼンで満場一致の承認！"),
    ("結婚", Normal, "プライベートでも大きな幸せが！"),
    ("仮説検証", Normal, "緻密な検証で未来を確信に変える。"),
    ("分析ミス", Trouble, "データの誤認が発覚... 迅速なリカバリーが必要。"),
    ("大型PJ受注", ProjectSuccess, "社会に巨大なインパクトを与える案件を受注！"),
    ("Manager昇格", Promotion, "マネジャー就任！プロジェクトの全責任を担う。"),
    ("管理職研修", Training, "ピープルマネジメントの神髄を体得。"),
    ("役職手当", Payday, "マネジメントへの高い評価と責任の対価。"),
    ("スコープ定義", Normal, "プロジェクトの勝利への地図を描く。"),
    ("要員不足", Trouble, "リソース不足を創意工夫で乗り切る！"),
    ("グローバルPJ", ProjectSuccess, "世界各国のDeloitteと連携し、国境を越えた価値を創出！"),
    ("採用面接", Normal, "未来のDTCを背負う逸財を見出す。"),
    ("昇給", Payday, "市場価値の高まりが年収に直結。"),
    ("ナレッジ共有", Normal, "自身の知見が組織全体の力になる。"),
    ("SM昇格", Promotion, "シニアマネジャーへ！卓越したリーダーとして君臨。"),
    ("予算削減", Trouble, "逆境をバリューの最大化で跳ね返す！"),
    ("営業活動", Normal, "新たな業界にDTCの風を吹き込む。"),
    ("特別報酬", Payday, "想像を超える業績への特別インセンティブ。"),
    ("リーダー研修", Training, "次世代パートナーとしての覚悟を決める。"),
    ("大規模DX", ProjectSuccess, "日本のデジタル社会の礎を築く成功。"),
    ("業界講演", Normal, "思想的リーダーとして業界を牽引。"),
    ("コンプラ問題", Trouble, "最高の誠実さで危機を解決に導く。"),
    ("経営会議", Normal, "DTCの屋台骨を支える重要な意思決定。"),
    ("Partner昇格", Promotion, "パートナー就任！DTCの共同経営者として歴史に名を刻む。"),
    ("配当金", Payday, "パートナーとして、ビジネスの果実を享受。"),
    ("全社戦略策定", Normal, "DTCの次の10年を創る青写真。"),
    ("サクセッション", Normal, "次世代のリーダーたちにバトンを繋ぐ。"),
    ("市場縮小", Trouble, "守りから攻めへの転換で危機の打開！"),
    ("ブランディング", Normal, "DTCのブランドを、唯一無二の存在へ。"),
    ("役員給与", Payday, "トップエグゼクティブとしての最高峰の報酬。"),
    ("M&Aアドバイザリー", ProjectSuccess, "業界再編を成功させ、新たな価値を生む。"),
    ("ESG評価", Normal, "社会全体の幸福と利益を両立させる。"),
    ("常務執行役員", Promotion, "組織をさらなる高みへと引き上げる。"),
    ("炎上対応", Trouble, "リーダーとしての胆力で最悪の事態を脱出。"),
    ("メディア取材", Normal, "あなたの言葉が社会の羅針盤となる。"),
    ("特別賞与", Payday, "人々の想像を超え、社会を変えた証。"),
    ("エグゼクティブ研修", Training, "世界のトップリーダーが集う場で哲学を磨く。"),
    ("提携交渉", Normal, "世紀の提携で、誰も見たことのない未来を拓く。"),
    ("国家級PJ", ProjectSuccess, "歴史に残り、語り継がれる偉業を達成！"),
    ("ガバナンス強化", Normal, "強固な基盤が、持続的な成長を約束する。"),
    ("イノベーション賞", Normal, "あなたの独創性が社会の常識を変えた。"),
    ("最終決算", Payday, "有終の美を飾る、過去最高の決算。"),
    ("体調不良", Trouble, "究極のインパクトのための、束の間の休息。"),
    ("DTC社長", Goal, "おめでとうございます！Make an Impact that Mattersを象徴する、DTC最高責任者へ就任！"),
];

/// Immutable ordered square sequence.
///
/// Cloning is cheap: squares live behind an `Arc`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    squares: Arc<[Square]>,
}

impl Board {
    /// The standard 60-square board.
    #[must_use]
    pub fn standard() -> Self {
        let squares = STANDARD_SQUARES
            .iter()
            .enumerate()
            .map(|(i, &(label, square_type, description))| {
                Square::new(i, square_type, label, description, SQUARES_PER_ROW)
            })
            .collect();
        Self { squares }
    }

    /// Build a board from (label, type, description) entries.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidBoard` if there are fewer than two
    /// squares, the first is not START, or the last is not GOAL.
    pub fn from_entries<L, D>(entries: impl IntoIterator<Item = (L, SquareType, D)>) -> Result<Self, GameError>
    where
        L: Into<String>,
        D: Into<String>,
    {
        let squares: Arc<[Square]> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, square_type, description))| {
                Square::new(i, square_type, label, description, SQUARES_PER_ROW)
            })
            .collect();

        if squares.len() < 2 {
            return Err(GameError::InvalidBoard(format!(
                "need at least 2 squares, got {}",
                squares.len()
            )));
        }
        if squares[0].square_type != SquareType::Start {
            return Err(GameError::InvalidBoard("first square must be START".into()));
        }
        if squares[squares.len() - 1].square_type != SquareType::Goal {
            return Err(GameError::InvalidBoard("last square must be GOAL".into()));
        }

        Ok(Self { squares })
    }

    /// Number of squares.
    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false: a valid board has at least two squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Index of the GOAL square.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.squares.len() - 1
    }

    /// Square at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// All squares in order.
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of layout rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.squares.len().div_ceil(SQUARES_PER_ROW)
    }

    /// Iterate over squares of one type.
    pub fn squares_of(&self, square_type: SquareType) -> impl Iterator<Item = &Square> {
        self.squares.iter().filter(move |s| s.square_type == square_type)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.squares[index]
    }
}
