use mathtree::{ExprTree, Node, OperatorKind, ParseMode, Symbol};
use std::io::{self, Write};

fn example_tree() -> ExprTree<f64> {
    let num = |x: f64| Node::new(Symbol::Num(x));
    // 1 + (2 + (3 * 4))
    let mul = Node::with_children(Symbol::Op(OperatorKind::Multiply), num(3.0), num(4.0));
    let inner = Node::with_children(Symbol::Op(OperatorKind::Add), num(2.0), mul);
    ExprTree::from_root(Node::with_children(
        Symbol::Op(OperatorKind::Add),
        num(1.0),
        inner,
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mode = if std::env::args().skip(1).any(|arg| arg == "--lenient") {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };

    let tree = example_tree();
    let symbols = tree
        .preorder()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    println!("Example: ");
    println!(": {}", symbols.join(" "));
    println!("=> {}", tree.evaluate()?);

    let mut buffer = String::new();
    let mut stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        stdout.write_all(": ".as_bytes())?;
        stdout.flush()?;
        buffer.clear();
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(());
        }
        let line = buffer.trim_end_matches(['\n', '\r']);
        match ExprTree::<f64>::from_string_with_mode(line, mode).and_then(|t| t.evaluate()) {
            Ok(x) => println!("=> {}", x),
            Err(e) => println!("Error: {}", e),
        }
    }
}
