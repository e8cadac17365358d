/*!
# `IF <expression> <relation> <expression> THEN <line number>`

## Purpose
Jump to a line contingent on a comparison.

## Remarks
The relation is one of `=`, `<>`, `<`, `<=`, `>` or `>=`.
When it holds, execution moves to the line exactly like `GOTO`.
Otherwise execution continues with the next line.
In direct mode a true comparison runs the program from that line.

## Example
```text
10 LET A = 1
20 PRINT A
30 LET A = A + 1
40 IF A <= 3 THEN 20
RUN
1
2
3
```

*/
