//! algolab Demo Binary
//!
//! Runs the example walkthrough for any topic in the corpus. Each
//! subcommand is a self-contained demonstration of one data structure or
//! algorithm.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use algolab::backtracking::{n_queens, permutations, subsets};
use algolab::dp::{fibonacci, knapsack_01, lcs, min_coins, KnapsackItem};
use algolab::graph::{
    bfs, dfs, dijkstra, kruskal, max_flow, prim, strongly_connected_components, topological_sort,
};
use algolab::greedy::{
    activity_selection, coin_change_greedy, fractional_knapsack, Activity, FractionalItem,
};
use algolab::search::{binary_search, linear_search};
use algolab::sort::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
use algolab::{
    BinaryTree, Bst, DynamicArray, Graph, HashTable, Heap, HeapKind, Queue, Result,
    SinglyLinkedList, Stack,
};

/// algolab demo runner
#[derive(Parser, Debug)]
#[command(name = "algolab-demo")]
#[command(about = "Walkthroughs for classic data structures and algorithms")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    topic: Topic,
}

#[derive(Subcommand, Debug)]
enum Topic {
    /// Dynamic array operations
    Array,
    /// Singly linked list operations
    LinkedList,
    /// LIFO stack operations
    Stack,
    /// FIFO queue operations
    Queue,
    /// Separate-chaining hash table
    HashTable,
    /// Binary tree traversals
    Tree,
    /// Binary search tree operations
    Bst,
    /// Min and max heaps
    Heap,
    /// Graph construction, BFS, DFS, Dijkstra
    Graph,
    /// Strongly connected components and topological sort
    Components,
    /// Kruskal's and Prim's minimum spanning trees
    Mst,
    /// Edmonds-Karp maximum flow
    Flow,
    /// Linear and binary search
    Search,
    /// The five classic sorts
    Sort,
    /// Dynamic programming problems
    Dp,
    /// Greedy algorithms
    Greedy,
    /// Backtracking problems
    Backtracking,
    /// Run every walkthrough in order
    All,
}

fn main() -> Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,algolab=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    tracing::info!("algolab v{}", algolab::VERSION);

    match args.topic {
        Topic::Array => demo_array()?,
        Topic::LinkedList => demo_linked_list(),
        Topic::Stack => demo_stack(),
        Topic::Queue => demo_queue(),
        Topic::HashTable => demo_hash_table(),
        Topic::Tree => demo_tree(),
        Topic::Bst => demo_bst(),
        Topic::Heap => demo_heap(),
        Topic::Graph => demo_graph()?,
        Topic::Components => demo_components()?,
        Topic::Mst => demo_mst()?,
        Topic::Flow => demo_flow()?,
        Topic::Search => demo_search(),
        Topic::Sort => demo_sort(),
        Topic::Dp => demo_dp()?,
        Topic::Greedy => demo_greedy()?,
        Topic::Backtracking => demo_backtracking(),
        Topic::All => {
            demo_array()?;
            demo_linked_list();
            demo_stack();
            demo_queue();
            demo_hash_table();
            demo_tree();
            demo_bst();
            demo_heap();
            demo_graph()?;
            demo_components()?;
            demo_mst()?;
            demo_flow()?;
            demo_search();
            demo_sort();
            demo_dp()?;
            demo_greedy()?;
            demo_backtracking();
        }
    }

    Ok(())
}

fn banner(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(title.len()));
}

// =============================================================================
// Basic Structures
// =============================================================================

fn demo_array() -> Result<()> {
    banner("Dynamic Array Operations");

    let mut array = DynamicArray::new();
    array.push(10);
    array.push(20);
    array.push(30);
    println!("after pushes: {:?}", array.as_slice());

    array.insert(1, 15)?;
    println!("after insert at 1: {:?}", array.as_slice());

    println!("element at 2: {}", array.get(2)?);
    println!("position of 20: {:?}", array.position(&20));

    let removed = array.remove(1)?;
    println!("removed at 1: {}", removed);
    println!("after removal: {:?}", array.as_slice());

    println!("length: {}, empty: {}", array.len(), array.is_empty());
    Ok(())
}

fn demo_linked_list() {
    banner("Singly Linked List Operations");

    let mut list = SinglyLinkedList::new();
    list.push_front(10);
    list.push_front(20);
    list.push_back(30);
    list.push_back(40);
    println!("after inserts: {}", list);

    println!("contains 30: {}", list.contains(&30));
    list.insert_after(&30, 35);
    println!("after insert after 30: {}", list);

    list.remove(&20);
    println!("after removing 20: {}", list);
    list.remove(&40);
    println!("after removing 40: {}", list);

    println!("length: {}", list.len());
}

fn demo_stack() {
    banner("Stack Operations");

    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);
    println!("top after pushes: {:?}", stack.peek());

    while let Ok(value) = stack.pop() {
        println!("popped: {}", value);
    }

    if let Err(err) = stack.pop() {
        println!("pop on empty stack: {}", err);
    }

    stack.push(1);
    stack.push(2);
    println!("size: {}", stack.len());
    stack.clear();
    println!("empty after clear: {}", stack.is_empty());
}

fn demo_queue() {
    banner("Queue Operations");

    let mut queue = Queue::new();
    queue.enqueue("first");
    queue.enqueue("second");
    queue.enqueue("third");
    println!("front: {:?}, back: {:?}", queue.front(), queue.back());

    while let Ok(value) = queue.dequeue() {
        println!("dequeued: {}", value);
    }

    if let Err(err) = queue.dequeue() {
        println!("dequeue on empty queue: {}", err);
    }
}

fn demo_hash_table() {
    banner("Hash Table Operations");

    let mut table = HashTable::new();
    table.insert("name", "John".to_string());
    table.insert("age", "25".to_string());
    table.insert("city", "New York".to_string());

    println!("name: {:?}", table.get(&"name"));
    println!("country (absent): {:?}", table.get(&"country"));

    let previous = table.insert("age", "26".to_string());
    println!("updating age returned: {:?}", previous);

    println!("removed age: {:?}", table.remove(&"age"));
    println!(
        "entries: {}, buckets: {}, load factor: {:.2}",
        table.len(),
        table.bucket_count(),
        table.load_factor()
    );
}

// =============================================================================
// Intermediate Structures
// =============================================================================

fn demo_tree() {
    banner("Binary Tree Traversals");

    let mut tree = BinaryTree::new();
    for value in 1..=7 {
        tree.insert(value);
    }

    println!("inorder:     {:?}", tree.inorder());
    println!("preorder:    {:?}", tree.preorder());
    println!("postorder:   {:?}", tree.postorder());
    println!("level order: {:?}", tree.level_order());
    println!(
        "height: {}, nodes: {}, leaves: {}",
        tree.height(),
        tree.node_count(),
        tree.leaf_count()
    );
}

fn demo_bst() {
    banner("Binary Search Tree Operations");

    let mut bst = Bst::new();
    for value in [50, 30, 70, 20, 40, 60, 80] {
        bst.insert(value);
    }

    println!("inorder (sorted): {:?}", bst.inorder());
    println!("contains 40: {}", bst.contains(&40));
    println!("contains 90: {}", bst.contains(&90));
    println!("min: {:?}, max: {:?}", bst.min(), bst.max());

    bst.remove(&30);
    println!("inorder after removing 30: {:?}", bst.inorder());
    println!("valid: {}, height: {}", bst.is_valid(), bst.height());
}

fn demo_heap() {
    banner("Heap Operations");

    let values = vec![5, 3, 7, 1, 4, 6, 2];

    let mut min_heap = Heap::new(HeapKind::Min);
    for value in &values {
        min_heap.push(*value);
    }
    print!("min heap drain:");
    while let Ok(value) = min_heap.pop() {
        print!(" {}", value);
    }
    println!();

    let max_heap = Heap::from_vec(HeapKind::Max, values.clone());
    println!("max heap drain: {:?}", max_heap.into_sorted_vec());

    let sorted = Heap::from_vec(HeapKind::Min, values).into_sorted_vec();
    println!("heap sort: {:?}", sorted);
}

// =============================================================================
// Graph Algorithms
// =============================================================================

fn demo_graph() -> Result<()> {
    banner("Graph: BFS, DFS, Dijkstra");

    let mut graph = Graph::directed();
    for (from, to, weight) in [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("E", "D", 7),
    ] {
        graph.add_edge(from, to, weight);
    }

    println!("vertices: {:?}", graph.vertices());
    let (matrix, order) = graph.adjacency_matrix();
    println!("adjacency matrix (rows follow {:?}):", order);
    for row in &matrix {
        println!("  {:?}", row);
    }

    println!("BFS from A: {:?}", bfs(&graph, &"A")?);
    println!("DFS from A: {:?}", dfs(&graph, &"A")?);

    let shortest = dijkstra(&graph, &"A")?;
    for vertex in graph.vertices() {
        match (shortest.distance(&vertex), shortest.path(&vertex)) {
            (Some(distance), Some(path)) => {
                println!("to {}: distance {}, path {:?}", vertex, distance, path);
            }
            _ => println!("to {}: unreachable", vertex),
        }
    }
    Ok(())
}

fn demo_components() -> Result<()> {
    banner("Strongly Connected Components and Topological Sort");

    let mut cyclic = Graph::directed();
    for (from, to) in [
        ("A", "B"),
        ("B", "C"),
        ("C", "A"),
        ("B", "D"),
        ("D", "E"),
        ("E", "F"),
        ("F", "D"),
        ("G", "F"),
        ("G", "H"),
        ("H", "I"),
        ("I", "J"),
        ("J", "G"),
    ] {
        cyclic.add_edge(from, to, 1);
    }

    for (i, component) in strongly_connected_components(&cyclic).iter().enumerate() {
        println!("component {}: {:?}", i + 1, component);
    }

    let mut dag = Graph::directed();
    for (from, to) in [
        ("A", "B"),
        ("A", "C"),
        ("B", "D"),
        ("C", "D"),
        ("D", "E"),
        ("E", "F"),
        ("G", "E"),
    ] {
        dag.add_edge(from, to, 1);
    }
    println!("topological order: {:?}", topological_sort(&dag)?);

    match topological_sort(&cyclic) {
        Err(err) => println!("cyclic graph: {}", err),
        Ok(order) => println!("unexpected order: {:?}", order),
    }
    Ok(())
}

fn demo_mst() -> Result<()> {
    banner("Minimum Spanning Trees");

    let mut graph = Graph::undirected();
    for (from, to, weight) in [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("E", "F", 5),
        ("D", "F", 6),
        ("B", "F", 2),
    ] {
        graph.add_edge(from, to, weight);
    }

    let kruskal_tree = kruskal(&graph)?;
    println!("Kruskal edges:");
    for edge in &kruskal_tree.edges {
        println!("  {} -- {} -- {}", edge.from, edge.weight, edge.to);
    }
    println!("Kruskal total weight: {}", kruskal_tree.total_weight);

    let prim_tree = prim(&graph, None)?;
    println!("Prim total weight: {}", prim_tree.total_weight);
    println!(
        "algorithms agree: {}",
        kruskal_tree.total_weight == prim_tree.total_weight
    );
    Ok(())
}

fn demo_flow() -> Result<()> {
    banner("Maximum Flow (Edmonds-Karp)");

    let mut network = Graph::directed();
    for (from, to, capacity) in [
        ("S", "A", 10),
        ("S", "B", 8),
        ("A", "C", 4),
        ("A", "D", 2),
        ("B", "C", 9),
        ("B", "D", 9),
        ("C", "T", 10),
        ("D", "T", 10),
    ] {
        network.add_edge(from, to, capacity);
    }

    let result = max_flow(&network, &"S", &"T")?;
    println!("maximum flow: {}", result.max_flow);
    for edge in &result.edge_flows {
        println!("  {} -> {}: {}", edge.from, edge.to, edge.weight);
    }
    Ok(())
}

// =============================================================================
// Algorithm Techniques
// =============================================================================

fn demo_search() {
    banner("Searching");

    let haystack = [4, 8, 15, 16, 23, 42];
    println!("linear search for 23: {:?}", linear_search(&haystack, &23));
    println!("binary search for 23: {:?}", binary_search(&haystack, &23));
    println!("binary search for 5:  {:?}", binary_search(&haystack, &5));
}

fn demo_sort() {
    banner("Sorting");

    let input = [5, 2, 9, 1, 7, 3, 8, 2];
    let sorts: [(&str, fn(&mut [i32])); 5] = [
        ("bubble", bubble_sort),
        ("selection", selection_sort),
        ("insertion", insertion_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
    ];

    for (name, sort) in sorts {
        let mut values = input.to_vec();
        sort(&mut values);
        println!("{:>9} sort: {:?}", name, values);
    }
}

fn demo_dp() -> Result<()> {
    banner("Dynamic Programming");

    println!("fibonacci(10) = {}", fibonacci(10));
    println!("fibonacci(50) = {}", fibonacci(50));

    let (a, b) = ("ABCBDAB", "BDCABA");
    println!("lcs({:?}, {:?}) = {:?}", a, b, lcs(a, b));

    let items = [
        KnapsackItem { weight: 1, value: 1 },
        KnapsackItem { weight: 3, value: 4 },
        KnapsackItem { weight: 4, value: 5 },
        KnapsackItem { weight: 5, value: 7 },
    ];
    let packed = knapsack_01(&items, 7);
    println!(
        "knapsack capacity 7: value {}, items {:?}",
        packed.best_value, packed.chosen
    );

    println!("min coins for 11 from [1, 2, 5]: {:?}", min_coins(&[1, 2, 5], 11)?);
    println!("min coins for 3 from [2]: {:?}", min_coins(&[2], 3)?);
    Ok(())
}

fn demo_greedy() -> Result<()> {
    banner("Greedy Algorithms");

    let activities = [
        Activity { start: 1, finish: 4 },
        Activity { start: 3, finish: 5 },
        Activity { start: 0, finish: 6 },
        Activity { start: 5, finish: 7 },
        Activity { start: 8, finish: 9 },
    ];
    println!("selected activities: {:?}", activity_selection(&activities)?);

    let items = [
        FractionalItem {
            weight: 10.0,
            value: 60.0,
        },
        FractionalItem {
            weight: 20.0,
            value: 100.0,
        },
        FractionalItem {
            weight: 30.0,
            value: 120.0,
        },
    ];
    let packed = fractional_knapsack(&items, 50.0)?;
    println!(
        "fractional knapsack capacity 50: value {}, fractions {:?}",
        packed.total_value, packed.fractions
    );

    println!(
        "greedy coins for 63 from [25, 10, 5, 1]: {:?}",
        coin_change_greedy(&[25, 10, 5, 1], 63)
    );
    println!(
        "greedy coins for 6 from [4, 3]: {:?}",
        coin_change_greedy(&[4, 3], 6)
    );
    Ok(())
}

fn demo_backtracking() {
    banner("Backtracking");

    let solutions = n_queens(4);
    println!("4-queens solutions: {:?}", solutions);
    println!("8-queens solution count: {}", n_queens(8).len());

    println!("permutations of [1, 2, 3]: {:?}", permutations(&[1, 2, 3]));
    println!("subsets of [1, 2, 3]: {:?}", subsets(&[1, 2, 3]));
}
