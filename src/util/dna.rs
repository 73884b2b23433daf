/// 把 motif / 序列统一为大写形式。
/// 字母表之外的字节原样保留：它们不会匹配任何 trie 边，
/// 在扫描中表现为普通的不匹配字符（不是错误）。
pub fn normalize_seq(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|b| b.to_ascii_uppercase()).collect()
}

/// 去掉序列中的空白（换行、回车、空格、制表符）并大写。
/// 用于整文件读入的裸序列输入。
pub fn normalize_stripped(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &b in raw {
        match b {
            b'\n' | b'\r' | b' ' | b'\t' => {}
            _ => out.push(b.to_ascii_uppercase()),
        }
    }
    out
}
