#![no_main]
use libfuzzer_sys::fuzz_target;

use mathtree::ExprTree;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(tree) = ExprTree::<f64>::from_string(s) {
            let _ = tree.evaluate();
        }
        if let Ok(tree) = ExprTree::<f64>::from_string_lenient(s) {
            let _ = tree.to_preorder_string();
            let _ = tree.evaluate();
        }
    }
});
