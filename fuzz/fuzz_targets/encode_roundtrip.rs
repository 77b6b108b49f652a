use honggfuzz::fuzz;

use chesscloud::FormatCode;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.is_empty() || data.len() > 1 << 16 {
                return;
            }
            let container =
                chesscloud::encode(data, FormatCode::PlainText).expect("encode failed");
            let decoded = chesscloud::decode(&container).expect("decode failed");
            assert_eq!(decoded.payload, data);
        });
    }
}
