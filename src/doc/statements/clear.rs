/*!
# `CLEAR`

## Purpose
Erase the program and all variables.

## Remarks
Nothing may follow `CLEAR`.

## Example
```text
10 LET A = 1
CLEAR
LIST
PRINT A
VARIABLE NOT DEFINED
```

*/
