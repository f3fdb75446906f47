//! Constant tables for the 72 micro-seasons (七十二候).
//!
//! Names and readings follow the Japanese 略本暦 (Meiji revision).
//! Index `i` belongs to solar term `i / 3`, position `i % 3`.

use crate::kou::Kou;

/// The 72 micro-seasons in table order, from 東風解凍 (立春 初候).
pub const KOU_TABLE: [Kou; 72] = [
    Kou::new("東風解凍", "はるかぜこおりをとく", "春の東風が川や湖の厚い氷を解かしはじめる。"),
    Kou::new("黄鶯睍睆", "うぐいすなく", "山里で鶯が美しい声で鳴きはじめる。"),
    Kou::new("魚上氷", "うおこおりをいずる", "割れた氷の間から魚が跳ね上がる。"),
    Kou::new(
        "土脉潤起",
        "つちのしょううるおいおこる",
        "冷たい雪が暖かな春の雨に変わり、大地が潤いはじめる。",
    ),
    Kou::new("霞始靆", "かすみはじめてたなびく", "春霞がたなびき、山野の景色がぼんやりと霞む。"),
    Kou::new("草木萌動", "そうもくめばえいずる", "草木が芽吹きはじめる。"),
    Kou::new("蟄虫啓戸", "すごもりむしとをひらく", "冬ごもりの虫が戸を開いて顔を出す。"),
    Kou::new("桃始笑", "ももはじめてさく", "桃の花が咲きはじめる。"),
    Kou::new("菜虫化蝶", "なむしちょうとなる", "青虫が羽化して紋白蝶になる。"),
    Kou::new("雀始巣", "すずめはじめてすくう", "雀が巣を構えはじめる。"),
    Kou::new("桜始開", "さくらはじめてひらく", "桜の花が咲きはじめる。"),
    Kou::new("雷乃発声", "かみなりすなわちこえをはっす", "遠くで雷の音がしはじめる。"),
    Kou::new("玄鳥至", "つばめきたる", "燕が南からやって来る。"),
    Kou::new("鴻雁北", "こうがんかえる", "雁が北へ渡っていく。"),
    Kou::new("虹始見", "にじはじめてあらわる", "雨の後に虹が出はじめる。"),
    Kou::new("葭始生", "あしはじめてしょうず", "葦が芽を吹きはじめる。"),
    Kou::new("霜止出苗", "しもやんでなえいずる", "霜が終わり、稲の苗が生長する。"),
    Kou::new("牡丹華", "ぼたんはなさく", "牡丹の花が咲く。"),
    Kou::new("蛙始鳴", "かわずはじめてなく", "蛙が鳴きはじめる。"),
    Kou::new("蚯蚓出", "みみずいずる", "蚯蚓が地上に這い出る。"),
    Kou::new("竹笋生", "たけのこしょうず", "筍が生えてくる。"),
    Kou::new("蚕起食桑", "かいこおきてくわをはむ", "蚕が桑の葉を盛んに食べはじめる。"),
    Kou::new("紅花栄", "べにばなさかう", "紅花が盛んに咲く。"),
    Kou::new("麦秋至", "むぎのときいたる", "麦が熟し、麦畑が黄金色になる。"),
    Kou::new("蟷螂生", "かまきりしょうず", "蟷螂が生まれ出る。"),
    Kou::new(
        "腐草為螢",
        "くされたるくさほたるとなる",
        "腐った草が蒸れて蛍になると考えられた、蛍の舞うころ。",
    ),
    Kou::new("梅子黄", "うめのみきばむ", "梅の実が黄ばんで熟す。"),
    Kou::new("乃東枯", "なつかれくさかるる", "夏枯草の花穂が枯れたように見える。"),
    Kou::new("菖蒲華", "あやめはなさく", "あやめの花が咲く。"),
    Kou::new("半夏生", "はんげしょうず", "烏柄杓が生える。"),
    Kou::new("温風至", "あつかぜいたる", "暖かい風が吹いてくる。"),
    Kou::new("蓮始開", "はすはじめてひらく", "蓮の花が開きはじめる。"),
    Kou::new("鷹乃学習", "たかすなわちわざをならう", "鷹の幼鳥が飛ぶことを覚える。"),
    Kou::new("桐始結花", "きりはじめてはなをむすぶ", "桐の実がなりはじめる。"),
    Kou::new("土潤溽暑", "つちうるおうてむしあつし", "土が湿って蒸し暑くなる。"),
    Kou::new("大雨時行", "たいうときどきふる", "時として大雨が降る。"),
    Kou::new("涼風至", "すずかぜいたる", "涼しい風が立ちはじめる。"),
    Kou::new("寒蝉鳴", "ひぐらしなく", "ひぐらしが鳴きはじめる。"),
    Kou::new("蒙霧升降", "ふかききりまとう", "深い霧が立ち込める。"),
    Kou::new("綿柎開", "わたのはなしべひらく", "綿を包む萼が開く。"),
    Kou::new("天地始粛", "てんちはじめてさむし", "ようやく暑さが鎮まる。"),
    Kou::new("禾乃登", "こくものすなわちみのる", "稲が実る。"),
    Kou::new("草露白", "くさのつゆしろし", "草に降りた露が白く光る。"),
    Kou::new("鶺鴒鳴", "せきれいなく", "鶺鴒が鳴きはじめる。"),
    Kou::new("玄鳥去", "つばめさる", "燕が南へ帰っていく。"),
    Kou::new("雷乃収声", "かみなりすなわちこえをおさむ", "雷が鳴り響かなくなる。"),
    Kou::new("蟄虫坏戸", "むしかくれてとをふさぐ", "虫が土中に掘った穴をふさぐ。"),
    Kou::new("水始涸", "みずはじめてかるる", "田畑の水を干しはじめる。"),
    Kou::new("鴻雁来", "こうがんきたる", "雁が飛来しはじめる。"),
    Kou::new("菊花開", "きくのはなひらく", "菊の花が咲く。"),
    Kou::new("蟋蟀在戸", "きりぎりすとにあり", "蟋蟀が戸口で鳴く。"),
    Kou::new("霜始降", "しもはじめてふる", "霜が降りはじめる。"),
    Kou::new("霎時施", "こさめときどきふる", "小雨がしとしと降る。"),
    Kou::new("楓蔦黄", "もみじつたきばむ", "もみじや蔦が黄葉する。"),
    Kou::new("山茶始開", "つばきはじめてひらく", "山茶花が咲きはじめる。"),
    Kou::new("地始凍", "ちはじめてこおる", "大地が凍りはじめる。"),
    Kou::new("金盞香", "きんせんかさく", "水仙の花が咲く。"),
    Kou::new("虹蔵不見", "にじかくれてみえず", "虹を見かけなくなる。"),
    Kou::new("朔風払葉", "きたかぜこのはをはらう", "北風が木の葉を払いのける。"),
    Kou::new("橘始黄", "たちばなはじめてきばむ", "橘の実が黄色くなりはじめる。"),
    Kou::new("閉塞成冬", "そらさむくふゆとなる", "天地の気が塞がって冬となる。"),
    Kou::new("熊蟄穴", "くまあなにこもる", "熊が冬眠のために穴に隠れる。"),
    Kou::new("鱖魚群", "さけのうおむらがる", "鮭が群がり川を上る。"),
    Kou::new("乃東生", "なつかれくさしょうず", "夏枯草が芽を出す。"),
    Kou::new("麋角解", "さわしかのつのおつる", "大鹿が角を落とす。"),
    Kou::new("雪下出麦", "ゆきわたりてむぎのびる", "雪の下で麦が芽を出す。"),
    Kou::new("芹乃栄", "せりすなわちさかう", "芹がよく生育する。"),
    Kou::new("水泉動", "しみずあたたかをふくむ", "地中で凍った泉が動きはじめる。"),
    Kou::new("雉始雊", "きじはじめてなく", "雄の雉が鳴きはじめる。"),
    Kou::new("款冬華", "ふきのはなさく", "蕗の薹が蕾を出す。"),
    Kou::new("水沢腹堅", "さわみずこおりつめる", "沢に氷が厚く張りつめる。"),
    Kou::new("鶏始乳", "にわとりはじめてとやにつく", "鶏が卵を産みはじめる。"),
];

/// Calendar anchors `(month, day, kou_index)` sorted by date.
///
/// Typical start dates of each micro-season; they drift by a day or two
/// from year to year against the longitude-anchored boundaries.
pub const KOU_CALENDAR_ANCHORS: [(u32, u32, u8); 72] = [
    (1, 5, 66), // 芹乃栄
    (1, 10, 67), // 水泉動
    (1, 15, 68), // 雉始雊
    (1, 20, 69), // 款冬華
    (1, 25, 70), // 水沢腹堅
    (1, 30, 71), // 鶏始乳
    (2, 4, 0), // 東風解凍
    (2, 9, 1), // 黄鶯睍睆
    (2, 14, 2), // 魚上氷
    (2, 19, 3), // 土脉潤起
    (2, 24, 4), // 霞始靆
    (3, 1, 5), // 草木萌動
    (3, 6, 6), // 蟄虫啓戸
    (3, 11, 7), // 桃始笑
    (3, 16, 8), // 菜虫化蝶
    (3, 21, 9), // 雀始巣
    (3, 26, 10), // 桜始開
    (3, 31, 11), // 雷乃発声
    (4, 5, 12), // 玄鳥至
    (4, 10, 13), // 鴻雁北
    (4, 15, 14), // 虹始見
    (4, 20, 15), // 葭始生
    (4, 25, 16), // 霜止出苗
    (4, 30, 17), // 牡丹華
    (5, 5, 18), // 蛙始鳴
    (5, 10, 19), // 蚯蚓出
    (5, 15, 20), // 竹笋生
    (5, 21, 21), // 蚕起食桑
    (5, 26, 22), // 紅花栄
    (5, 31, 23), // 麦秋至
    (6, 6, 24), // 蟷螂生
    (6, 11, 25), // 腐草為螢
    (6, 16, 26), // 梅子黄
    (6, 21, 27), // 乃東枯
    (6, 27, 28), // 菖蒲華
    (7, 2, 29), // 半夏生
    (7, 7, 30), // 温風至
    (7, 12, 31), // 蓮始開
    (7, 17, 32), // 鷹乃学習
    (7, 23, 33), // 桐始結花
    (7, 28, 34), // 土潤溽暑
    (8, 2, 35), // 大雨時行
    (8, 7, 36), // 涼風至
    (8, 13, 37), // 寒蝉鳴
    (8, 18, 38), // 蒙霧升降
    (8, 23, 39), // 綿柎開
    (8, 28, 40), // 天地始粛
    (9, 2, 41), // 禾乃登
    (9, 8, 42), // 草露白
    (9, 13, 43), // 鶺鴒鳴
    (9, 18, 44), // 玄鳥去
    (9, 23, 45), // 雷乃収声
    (9, 28, 46), // 蟄虫坏戸
    (10, 3, 47), // 水始涸
    (10, 8, 48), // 鴻雁来
    (10, 13, 49), // 菊花開
    (10, 18, 50), // 蟋蟀在戸
    (10, 23, 51), // 霜始降
    (10, 28, 52), // 霎時施
    (11, 2, 53), // 楓蔦黄
    (11, 7, 54), // 山茶始開
    (11, 12, 55), // 地始凍
    (11, 17, 56), // 金盞香
    (11, 22, 57), // 虹蔵不見
    (11, 27, 58), // 朔風払葉
    (12, 2, 59), // 橘始黄
    (12, 7, 60), // 閉塞成冬
    (12, 12, 61), // 熊蟄穴
    (12, 16, 62), // 鱖魚群
    (12, 21, 63), // 乃東生
    (12, 26, 64), // 麋角解
    (12, 31, 65), // 雪下出麦
];
